//! Panel identities and their fixed attributes

use serde::Serialize;

/// Every panel on the dashboard. Attributes that the UI and the fusion score
/// need are matched exhaustively here rather than looked up by string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    XrpQuote,
    GlobalMarket,
    MarketBoard,
    PredictionMarkets,
    LedgerStatus,
    FeeStats,
}

impl PanelId {
    pub fn title(&self) -> &'static str {
        match self {
            PanelId::XrpQuote => "XRP QUOTE",
            PanelId::GlobalMarket => "GLOBAL MARKET",
            PanelId::MarketBoard => "MARKET BOARD",
            PanelId::PredictionMarkets => "PREDICTION MARKETS",
            PanelId::LedgerStatus => "LEDGER STATUS",
            PanelId::FeeStats => "FEE STATS",
        }
    }

    /// Weight of this panel's signal in the Signal Fusion score.
    pub fn fusion_weight(&self) -> f64 {
        match self {
            PanelId::XrpQuote => 0.35,
            PanelId::GlobalMarket => 0.20,
            PanelId::MarketBoard => 0.15,
            PanelId::LedgerStatus => 0.20,
            PanelId::FeeStats => 0.10,
            PanelId::PredictionMarkets => 0.0,
        }
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_fusion_weights_sum_to_one() {
        let total: f64 = PanelId::iter().map(|id| id.fusion_weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<_> = PanelId::iter().map(|id| id.title()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), PanelId::iter().count());
    }
}

//! Prediction market odds
//!
//! There is no live integration behind this panel; it always renders its
//! default payload tagged as fallback.

use super::format::{percent, usd_compact};
use crate::network::{FetchError, PanelRequest};
use crate::panel::{PanelId, PanelSpec, PanelValue, Row, Tone};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionMarket {
    pub question: String,
    pub yes_probability: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionMarkets {
    pub markets: Vec<PredictionMarket>,
}

impl Default for PredictionMarkets {
    fn default() -> Self {
        let market = |question: &str, yes_probability: f64, volume: f64| PredictionMarket {
            question: question.to_string(),
            yes_probability,
            volume,
        };
        Self {
            markets: vec![
                market("XRP spot ETF approved this year", 0.72, 18_400_000.0),
                market("XRP closes the year above $5", 0.31, 6_900_000.0),
                market("RLUSD supply passes $1B", 0.58, 2_300_000.0),
                market("XRPL AMM TVL doubles", 0.44, 1_100_000.0),
            ],
        }
    }
}

impl PanelValue for PredictionMarkets {
    fn rows(&self) -> Vec<Row> {
        self.markets
            .iter()
            .map(|market| {
                let tone = if market.yes_probability >= 0.5 {
                    Tone::Positive
                } else {
                    Tone::Negative
                };
                Row::new(
                    market.question.clone(),
                    format!(
                        "{} yes  ({} vol)",
                        percent(market.yes_probability * 100.0),
                        usd_compact(market.volume)
                    ),
                )
                .with_tone(tone)
            })
            .collect()
    }
}

pub fn parse(_body: &Value) -> Result<PredictionMarkets, FetchError> {
    Err(FetchError::NoIntegration)
}

pub fn spec() -> PanelSpec<PredictionMarkets> {
    PanelSpec {
        id: PanelId::PredictionMarkets,
        request: PanelRequest::Unavailable,
        parse,
        default: PredictionMarkets::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::OfflineTransport;
    use crate::panel::{ApplyOutcome, DataPanel, FallbackReason, Provenance};
    use std::time::Duration;

    #[tokio::test]
    async fn test_always_falls_back() {
        let mut panel = DataPanel::mount(spec(), Duration::from_millis(100));
        let outcome = panel.refresh(&OfflineTransport).await;

        assert!(matches!(
            outcome,
            ApplyOutcome::Fallback {
                reason: FallbackReason::NoIntegration,
                ..
            }
        ));
        assert_eq!(panel.state().provenance(), Provenance::Fallback);
        assert_eq!(panel.state().value(), &PredictionMarkets::default());
        assert_eq!(
            panel.state().error(),
            Some("no live integration for this panel")
        );
    }

    #[test]
    fn test_does_not_contribute_to_fusion() {
        assert_eq!(PredictionMarkets::default().signal(), None);
    }
}

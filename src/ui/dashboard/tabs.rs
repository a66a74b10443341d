//! Dashboard tabs
//!
//! Every per-tab attribute lives in one exhaustive `match` so adding a tab
//! cannot leave a colour or panel list undefined.

use crate::panel::PanelId;
use ratatui::prelude::Color;
use strum::IntoEnumIterator;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::EnumIter)]
pub enum Tab {
    #[default]
    Home,
    AnalyticsLab,
    Network,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::AnalyticsLab => "Analytics Lab",
            Tab::Network => "Network",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            Tab::Home => '1',
            Tab::AnalyticsLab => '2',
            Tab::Network => '3',
        }
    }

    pub fn accent(&self) -> Color {
        match self {
            Tab::Home => Color::Cyan,
            Tab::AnalyticsLab => Color::LightMagenta,
            Tab::Network => Color::LightGreen,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Tab::Home => "◆",
            Tab::AnalyticsLab => "▲",
            Tab::Network => "●",
        }
    }

    /// Panels shown on this tab. Each panel belongs to exactly one tab.
    pub fn panels(&self) -> &'static [PanelId] {
        match self {
            Tab::Home => &[PanelId::XrpQuote, PanelId::GlobalMarket],
            Tab::AnalyticsLab => &[PanelId::MarketBoard, PanelId::PredictionMarkets],
            Tab::Network => &[PanelId::LedgerStatus, PanelId::FeeStats],
        }
    }

    pub fn from_hotkey(key: char) -> Option<Self> {
        Tab::iter().find(|tab| tab.hotkey() == key)
    }

    pub fn index(&self) -> usize {
        Tab::iter().position(|tab| tab == *self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        let tabs: Vec<Tab> = Tab::iter().collect();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn previous(&self) -> Self {
        let tabs: Vec<Tab> = Tab::iter().collect();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_panel_on_exactly_one_tab() {
        let mut seen = HashSet::new();
        for tab in Tab::iter() {
            for panel in tab.panels() {
                assert!(seen.insert(*panel), "{} appears twice", panel);
            }
        }
        assert_eq!(seen.len(), PanelId::iter().count());
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Tab::Home.next(), Tab::AnalyticsLab);
        assert_eq!(Tab::Network.next(), Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::Network);
    }

    #[test]
    fn test_hotkeys() {
        assert_eq!(Tab::from_hotkey('2'), Some(Tab::AnalyticsLab));
        assert_eq!(Tab::from_hotkey('9'), None);
    }
}

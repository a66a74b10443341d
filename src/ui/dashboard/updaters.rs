//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from results and events

use super::state::DashboardState;
use super::tabs::Tab;

use crate::fusion::FusionReading;
use crate::panel::{ApplyOutcome, FallbackReason, PanelId};
use crate::workers::core::outcome_event;
use crate::workers::refresher::PanelResult;

use std::time::Duration;

impl DashboardState {
    /// Advance one tick: log queued events, rescore, refresh the poll countdown.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }

        self.fusion = FusionReading::compute(&self.panels);
        let next = self.poll_timer_mut().time_until_next();
        self.set_next_poll_in(next);
    }

    /// Apply a finished request to its panel and record what happened.
    pub fn apply_result(&mut self, result: PanelResult) -> ApplyOutcome {
        let PanelResult {
            ticket,
            outcome,
            latency,
        } = result;
        let applied = self.panels.apply(ticket, &outcome, latency);

        match applied {
            ApplyOutcome::Live => self.stats.live += 1,
            ApplyOutcome::Cached => self.stats.cached += 1,
            ApplyOutcome::Fallback {
                reason: FallbackReason::RateLimited,
                ..
            } => {
                self.stats.fallback += 1;
                self.stats.rate_limited += 1;
            }
            ApplyOutcome::Fallback { .. } => self.stats.fallback += 1,
            ApplyOutcome::Stale => self.stats.stale += 1,
        }

        if applied != ApplyOutcome::Stale {
            if let Some(secs) = outcome.as_ref().err().and_then(|e| e.retry_after_secs()) {
                self.poll_timer_mut()
                    .record_server_delay(Duration::from_secs(secs));
            }
        }

        if let Some(panel) = self.panels.get(ticket.panel) {
            let event = outcome_event(panel, applied);
            if event.should_display() {
                self.add_event(event);
            }
        }
        applied
    }

    /// Panels on the visible tab.
    pub fn visible_panels(&self) -> &'static [PanelId] {
        self.active_tab.panels()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
    }

    /// Whether the poll interval has elapsed.
    pub fn poll_due(&mut self) -> bool {
        self.poll_timer_mut().is_due()
    }

    /// Note that a refresh was started so the poll interval restarts.
    pub fn record_refresh(&mut self) {
        self.poll_timer_mut().record_attempt();
    }

    pub fn any_loading(&self) -> bool {
        self.panels.iter().any(|panel| panel.is_loading())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Endpoints, Environment};
    use crate::events::EventType;
    use crate::feeds;
    use crate::network::FetchError;
    use crate::panel::Provenance;
    use crate::ui::app::UIConfig;
    use serde_json::json;
    use std::time::Instant;

    fn dashboard(poll_interval: Option<Duration>) -> DashboardState {
        let endpoints = Endpoints::for_environment(Environment::Mainnet);
        DashboardState::new(
            Environment::Mainnet,
            Instant::now(),
            feeds::mount_all(&endpoints, Duration::ZERO),
            UIConfig::new(false, poll_interval, false),
        )
    }

    fn result(
        state: &mut DashboardState,
        panel: PanelId,
        outcome: Result<serde_json::Value, FetchError>,
    ) -> PanelResult {
        let ticket = state.panels.get_mut(panel).unwrap().begin_refresh();
        PanelResult {
            ticket,
            outcome,
            latency: Duration::from_millis(250),
        }
    }

    #[test]
    fn test_rate_limit_logs_and_delays_polling() {
        let mut state = dashboard(Some(Duration::from_secs(60)));
        state.record_refresh();

        let throttled = result(
            &mut state,
            PanelId::XrpQuote,
            Err(FetchError::RateLimited {
                retry_after_secs: Some(300),
            }),
        );
        let outcome = state.apply_result(throttled);
        state.update();

        assert!(matches!(outcome, ApplyOutcome::Fallback { .. }));
        assert_eq!(state.stats.rate_limited, 1);
        assert_eq!(
            state.activity_logs.back().map(|e| e.event_type),
            Some(EventType::RateLimited)
        );
        assert!(state.next_poll_in().unwrap() > Duration::from_secs(60));
    }

    #[test]
    fn test_stale_result_only_counts() {
        let mut state = dashboard(None);
        let first = result(&mut state, PanelId::GlobalMarket, Err(FetchError::Offline));
        let _second = state
            .panels
            .get_mut(PanelId::GlobalMarket)
            .unwrap()
            .begin_refresh();

        assert_eq!(state.apply_result(first), ApplyOutcome::Stale);
        assert_eq!(state.stats.stale, 1);
        assert!(state.any_loading());
        assert_eq!(state.next_poll_in(), None);
    }

    #[test]
    fn test_live_result_updates_fusion() {
        let mut state = dashboard(None);
        let before = state.fusion;
        let live = result(
            &mut state,
            PanelId::XrpQuote,
            Ok(json!({"ripple": {"usd": 3.4, "usd_24h_change": -9.0}})),
        );

        assert_eq!(state.apply_result(live), ApplyOutcome::Live);
        state.update();

        assert_eq!(
            state.panels.get(PanelId::XrpQuote).unwrap().provenance(),
            Provenance::Live
        );
        assert_eq!(state.fusion.fresh_inputs, 1);
        assert!(state.fusion.score < before.score);
    }

    #[test]
    fn test_tab_navigation() {
        let mut state = dashboard(None);
        assert_eq!(state.visible_panels(), Tab::Home.panels());
        state.next_tab();
        assert_eq!(state.active_tab, Tab::AnalyticsLab);
        state.select_tab(Tab::Network);
        state.previous_tab();
        assert_eq!(state.active_tab, Tab::AnalyticsLab);
    }
}

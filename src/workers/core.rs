//! Core worker utilities

use crate::error_classifier::LogLevel;
use crate::events::{Event, EventType};
use crate::panel::{ApplyOutcome, FallbackReason, Panel, PanelId};
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        if event.should_display() {
            let _ = self.sender.send(event).await;
        }
    }

    pub async fn send_panel_event(
        &self,
        panel: PanelId,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::panel_with_level(
            panel, message, event_type, log_level,
        ))
        .await;
    }
}

/// Describe what applying a result did to `panel`.
pub fn outcome_event(panel: &dyn Panel, outcome: ApplyOutcome) -> Event {
    let id = panel.id();
    let latency = panel
        .last_latency()
        .map(|latency| format!(" in {}ms", latency.as_millis()))
        .unwrap_or_default();

    match outcome {
        ApplyOutcome::Live => Event::panel(id, format!("live data{}", latency), EventType::Success),
        ApplyOutcome::Cached => {
            Event::panel(id, format!("cached data{}", latency), EventType::Success)
        }
        ApplyOutcome::Fallback { reason, level } => {
            let event_type = match reason {
                FallbackReason::RateLimited => EventType::RateLimited,
                _ => EventType::Fallback,
            };
            let message = format!(
                "showing fallback data ({})",
                panel.error().unwrap_or("unknown error")
            );
            Event::panel_with_level(id, message, event_type, level)
        }
        ApplyOutcome::Stale => Event::panel_with_level(
            id,
            "dropped response from a superseded refresh".to_string(),
            EventType::Stale,
            LogLevel::Debug,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Endpoints, Environment};
    use crate::feeds;
    use crate::network::FetchError;
    use std::time::Duration;

    #[test]
    fn test_rate_limit_outcome_has_its_own_event_type() {
        let endpoints = Endpoints::for_environment(Environment::Mainnet);
        let mut panels = feeds::mount_all(&endpoints, Duration::ZERO);
        let panel = panels.get_mut(PanelId::XrpQuote).unwrap();
        let ticket = panel.begin_refresh();
        let outcome = panel.apply(
            ticket,
            &Err(FetchError::RateLimited {
                retry_after_secs: Some(12),
            }),
            Duration::from_millis(40),
        );

        let event = outcome_event(&**panel, outcome);
        assert_eq!(event.event_type, EventType::RateLimited);
        assert_eq!(event.log_level, LogLevel::Warn);
        assert!(event.msg.contains("429"));
    }

    #[tokio::test]
    async fn test_hidden_events_are_not_sent() {
        let (sender, mut receiver) = mpsc::channel(4);
        let events = EventSender::new(sender);
        events
            .send_panel_event(
                PanelId::FeeStats,
                "trace noise".to_string(),
                EventType::Refresh,
                LogLevel::Trace,
            )
            .await;
        events
            .send_panel_event(
                PanelId::FeeStats,
                "live data".to_string(),
                EventType::Success,
                LogLevel::Info,
            )
            .await;
        drop(events);

        let first = receiver.recv().await.unwrap();
        assert_eq!(first.msg, "live data");
        assert!(receiver.recv().await.is_none());
    }
}

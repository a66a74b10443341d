//! Event System
//!
//! Types and implementations for panel lifecycle events and logging

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use crate::panel::PanelId;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// A single panel's fetch lifecycle.
    Panel(PanelId),
    /// The dashboard itself (startup, polling, shutdown).
    Dashboard,
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Panel(id) => write!(f, "{}", id),
            Source::Dashboard => write!(f, "DASHBOARD"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Fallback,
    RateLimited,
    Refresh,
    Stale,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn panel(panel: PanelId, msg: String, event_type: EventType) -> Self {
        Self::new(Source::Panel(panel), msg, event_type, LogLevel::Info)
    }

    pub fn panel_with_level(
        panel: PanelId,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Source::Panel(panel), msg, event_type, log_level)
    }

    pub fn dashboard(msg: String, event_type: EventType) -> Self {
        Self::new(Source::Dashboard, msg, event_type, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_always_displayed() {
        let event = Event::panel_with_level(
            PanelId::XrpQuote,
            "live".to_string(),
            EventType::Success,
            LogLevel::Trace,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_display_includes_source() {
        let event = Event::panel(
            PanelId::FeeStats,
            "using fallback payload".to_string(),
            EventType::Fallback,
        );
        let line = event.to_string();
        assert!(line.starts_with("Fallback ["));
        assert!(line.contains("FEE STATS: using fallback payload"));
    }
}

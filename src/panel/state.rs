//! Panel state and provenance

use chrono::{DateTime, Local};
use serde::Serialize;
use std::time::Duration;

/// Where the value currently on screen came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provenance {
    /// Fetched from the remote during this session
    Live,
    /// Fetched, but fast enough that a cache hit is assumed (display only)
    Cached,
    /// The panel's default payload
    Fallback,
}

impl Provenance {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Provenance::Live | Provenance::Cached)
    }
}

/// Why a panel fell back to its default payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    RateLimited,
    Network,
    Http(u16),
    Parse,
    NoIntegration,
    Offline,
}

/// Lifecycle state of one panel. Only [`super::DataPanel`] mutates it.
#[derive(Debug, Clone)]
pub struct PanelState<T> {
    pub(super) value: T,
    pub(super) provenance: Provenance,
    pub(super) is_loading: bool,
    pub(super) error: Option<String>,
    pub(super) last_updated: Option<DateTime<Local>>,
    pub(super) last_latency: Option<Duration>,
}

impl<T> PanelState<T> {
    /// Mount state: the seeded default, tagged as fallback.
    pub(super) fn seeded(default: T) -> Self {
        Self {
            value: default,
            provenance: Provenance::Fallback,
            is_loading: false,
            error: None,
            last_updated: None,
            last_latency: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn last_latency(&self) -> Option<Duration> {
        self.last_latency
    }
}

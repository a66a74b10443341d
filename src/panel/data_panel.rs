//! The fetch/fallback contract shared by every panel
//!
//! A [`DataPanel`] starts as `Idle(fallback, default)`, moves to loading on
//! [`DataPanel::begin_refresh`], and settles on live, cached or fallback when
//! the matching result is applied. Results carrying an outdated ticket are
//! dropped so overlapping refreshes can never overwrite newer state.

use super::id::PanelId;
use super::state::{FallbackReason, PanelState, Provenance};
use super::value::PanelValue;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::network::{FetchError, PanelRequest, Transport};
use chrono::Local;
use serde_json::Value;
use std::time::{Duration, Instant};

/// Parses a raw JSON body into the panel's typed value.
pub type ParseFn<T> = fn(&Value) -> Result<T, FetchError>;

/// Endpoint, parser and default payload for one panel.
#[derive(Debug, Clone)]
pub struct PanelSpec<T> {
    pub id: PanelId,
    pub request: PanelRequest,
    pub parse: ParseFn<T>,
    pub default: T,
}

/// Identifies one refresh attempt. Only the most recently issued ticket may
/// change panel state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    pub panel: PanelId,
    pub seq: u64,
}

/// What applying a result did to the panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Live,
    Cached,
    Fallback {
        reason: FallbackReason,
        level: LogLevel,
    },
    /// A newer refresh was started; this result was discarded.
    Stale,
}

#[derive(Debug)]
pub struct DataPanel<T: PanelValue> {
    spec: PanelSpec<T>,
    state: PanelState<T>,
    latest_seq: u64,
    cached_threshold: Duration,
    classifier: ErrorClassifier,
}

impl<T: PanelValue> DataPanel<T> {
    /// Mount a panel with its default payload shown as fallback.
    pub fn mount(spec: PanelSpec<T>, cached_threshold: Duration) -> Self {
        let state = PanelState::seeded(spec.default.clone());
        Self {
            spec,
            state,
            latest_seq: 0,
            cached_threshold,
            classifier: ErrorClassifier::new(),
        }
    }

    pub fn id(&self) -> PanelId {
        self.spec.id
    }

    pub fn spec(&self) -> &PanelSpec<T> {
        &self.spec
    }

    pub fn state(&self) -> &PanelState<T> {
        &self.state
    }

    /// Start a refresh: mark loading and clear the last error. The current
    /// value stays visible while the request is in flight.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_seq += 1;
        self.state.is_loading = true;
        self.state.error = None;
        RefreshTicket {
            panel: self.spec.id,
            seq: self.latest_seq,
        }
    }

    /// Apply the result of the request started with `ticket`.
    pub fn apply(
        &mut self,
        ticket: RefreshTicket,
        outcome: &Result<Value, FetchError>,
        latency: Duration,
    ) -> ApplyOutcome {
        if ticket.panel != self.spec.id || ticket.seq != self.latest_seq {
            log::debug!(
                "{}: dropping stale result #{} (latest #{})",
                self.spec.id,
                ticket.seq,
                self.latest_seq
            );
            return ApplyOutcome::Stale;
        }

        self.state.is_loading = false;
        self.state.last_latency = Some(latency);

        match outcome {
            Ok(body) => match (self.spec.parse)(body) {
                Ok(value) => self.settle(value, latency),
                Err(e) => self.fall_back(&e),
            },
            Err(e) => self.fall_back(e),
        }
    }

    fn settle(&mut self, value: T, latency: Duration) -> ApplyOutcome {
        let provenance = if latency < self.cached_threshold {
            Provenance::Cached
        } else {
            Provenance::Live
        };
        self.state.value = value;
        self.state.provenance = provenance;
        self.state.error = None;
        self.state.last_updated = Some(Local::now());
        match provenance {
            Provenance::Cached => ApplyOutcome::Cached,
            _ => ApplyOutcome::Live,
        }
    }

    fn fall_back(&mut self, error: &FetchError) -> ApplyOutcome {
        let reason = error.fallback_reason();
        let level = self.classifier.classify_fetch_error(error);
        let message = self.classifier.describe_fetch_error(error);
        log::log!(
            log::Level::from(level),
            "{}: using fallback payload ({})",
            self.spec.id,
            message
        );
        self.state.value = self.spec.default.clone();
        self.state.provenance = Provenance::Fallback;
        self.state.error = Some(message);
        ApplyOutcome::Fallback { reason, level }
    }

    /// Begin, send and apply in one step.
    pub async fn refresh(&mut self, transport: &dyn Transport) -> ApplyOutcome {
        let ticket = self.begin_refresh();
        let started = Instant::now();
        let outcome = transport.send(&self.spec.request).await;
        self.apply(ticket, &outcome, started.elapsed())
    }
}

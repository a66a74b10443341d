//! Heterogeneous panel collection
//!
//! Panels own their state exclusively; the set only routes tickets and
//! results to the right panel and offers read-only views across all of them.

use super::data_panel::{ApplyOutcome, DataPanel, RefreshTicket};
use super::id::PanelId;
use super::state::Provenance;
use super::value::{PanelValue, Row};
use crate::network::{FetchError, PanelRequest, Transport};
use chrono::{DateTime, Local};
use futures::future::join_all;
use serde_json::Value;
use std::time::{Duration, Instant};

/// Type-erased view of a [`DataPanel`].
pub trait Panel: Send + std::fmt::Debug {
    fn id(&self) -> PanelId;
    fn request(&self) -> &PanelRequest;
    fn begin_refresh(&mut self) -> RefreshTicket;
    fn apply(
        &mut self,
        ticket: RefreshTicket,
        outcome: &Result<Value, FetchError>,
        latency: Duration,
    ) -> ApplyOutcome;
    fn provenance(&self) -> Provenance;
    fn is_loading(&self) -> bool;
    fn error(&self) -> Option<&str>;
    fn last_updated(&self) -> Option<DateTime<Local>>;
    fn last_latency(&self) -> Option<Duration>;
    fn rows(&self) -> Vec<Row>;
    fn signal(&self) -> Option<f64>;
    fn value_json(&self) -> Value;
}

impl<T: PanelValue> Panel for DataPanel<T> {
    fn id(&self) -> PanelId {
        DataPanel::id(self)
    }

    fn request(&self) -> &PanelRequest {
        &self.spec().request
    }

    fn begin_refresh(&mut self) -> RefreshTicket {
        DataPanel::begin_refresh(self)
    }

    fn apply(
        &mut self,
        ticket: RefreshTicket,
        outcome: &Result<Value, FetchError>,
        latency: Duration,
    ) -> ApplyOutcome {
        DataPanel::apply(self, ticket, outcome, latency)
    }

    fn provenance(&self) -> Provenance {
        self.state().provenance()
    }

    fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    fn error(&self) -> Option<&str> {
        self.state().error()
    }

    fn last_updated(&self) -> Option<DateTime<Local>> {
        self.state().last_updated()
    }

    fn last_latency(&self) -> Option<Duration> {
        self.state().last_latency()
    }

    fn rows(&self) -> Vec<Row> {
        self.state().value().rows()
    }

    fn signal(&self) -> Option<f64> {
        self.state().value().signal()
    }

    fn value_json(&self) -> Value {
        serde_json::to_value(self.state().value()).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Default)]
pub struct PanelSet {
    panels: Vec<Box<dyn Panel>>,
}

impl PanelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a panel. A panel with the same id replaces the existing one.
    pub fn insert(&mut self, panel: Box<dyn Panel>) {
        let id = panel.id();
        self.panels.retain(|p| p.id() != id);
        self.panels.push(panel);
    }

    pub fn get(&self, id: PanelId) -> Option<&dyn Panel> {
        self.panels.iter().find(|p| p.id() == id).map(|p| p.as_ref())
    }

    pub fn get_mut(&mut self, id: PanelId) -> Option<&mut Box<dyn Panel>> {
        self.panels.iter_mut().find(|p| p.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Panel> {
        self.panels.iter().map(|p| p.as_ref())
    }

    pub fn ids(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id()).collect()
    }

    /// Route a result to its panel. Unknown panels are treated as stale.
    pub fn apply(
        &mut self,
        ticket: RefreshTicket,
        outcome: &Result<Value, FetchError>,
        latency: Duration,
    ) -> ApplyOutcome {
        match self.get_mut(ticket.panel) {
            Some(panel) => panel.apply(ticket, outcome, latency),
            None => ApplyOutcome::Stale,
        }
    }

    /// Refresh every panel once, concurrently. Panels resolve independently
    /// and in any order.
    pub async fn refresh_all(&mut self, transport: &dyn Transport) -> Vec<(PanelId, ApplyOutcome)> {
        let pending: Vec<(RefreshTicket, PanelRequest)> = self
            .panels
            .iter_mut()
            .map(|panel| (panel.begin_refresh(), panel.request().clone()))
            .collect();

        let results = join_all(pending.iter().map(|(_, request)| async move {
            let started = Instant::now();
            let outcome = transport.send(request).await;
            (outcome, started.elapsed())
        }))
        .await;

        pending
            .iter()
            .zip(results)
            .map(|((ticket, _), (outcome, latency))| {
                (ticket.panel, self.apply(*ticket, &outcome, latency))
            })
            .collect()
    }
}

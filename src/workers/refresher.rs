//! Panel refresher
//!
//! Runs panel requests on the tokio runtime and hands results back to the UI
//! thread, which owns the panels. Starting a new refresh for a panel cancels
//! the one still in flight, and dropping the refresher cancels everything.

use super::core::EventSender;
use crate::error_classifier::LogLevel;
use crate::events::EventType;
use crate::network::{FetchError, PanelRequest, Transport};
use crate::panel::{PanelId, PanelSet, RefreshTicket};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A completed request, ready to be applied to its panel.
#[derive(Debug)]
pub struct PanelResult {
    pub ticket: RefreshTicket,
    pub outcome: Result<Value, FetchError>,
    pub latency: Duration,
}

pub struct PanelRefresher {
    transport: Arc<dyn Transport>,
    results: mpsc::Sender<PanelResult>,
    events: EventSender,
    root: CancellationToken,
    in_flight: HashMap<PanelId, CancellationToken>,
}

impl PanelRefresher {
    pub fn new(
        transport: Arc<dyn Transport>,
        results: mpsc::Sender<PanelResult>,
        events: EventSender,
    ) -> Self {
        Self {
            transport,
            results,
            events,
            root: CancellationToken::new(),
            in_flight: HashMap::new(),
        }
    }

    /// Fetch `request` for `ticket`, cancelling the panel's previous request.
    pub fn dispatch(&mut self, ticket: RefreshTicket, request: PanelRequest) -> JoinHandle<()> {
        let token = self.root.child_token();
        if let Some(previous) = self.in_flight.insert(ticket.panel, token.clone()) {
            previous.cancel();
        }

        let transport = Arc::clone(&self.transport);
        let results = self.results.clone();
        let events = self.events.clone();
        let root = self.root.clone();

        tokio::spawn(async move {
            let started = Instant::now();
            tokio::select! {
                biased;

                _ = token.cancelled() => {
                    if !root.is_cancelled() {
                        events
                            .send_panel_event(
                                ticket.panel,
                                format!("request #{} superseded", ticket.seq),
                                EventType::Stale,
                                LogLevel::Debug,
                            )
                            .await;
                    }
                }

                outcome = transport.send(&request) => {
                    let latency = started.elapsed();
                    if token.is_cancelled() {
                        return;
                    }
                    let _ = results
                        .send(PanelResult {
                            ticket,
                            outcome,
                            latency,
                        })
                        .await;
                }
            }
        })
    }

    /// Start a refresh for each of `ids` that exists in `panels`.
    pub fn refresh(&mut self, panels: &mut PanelSet, ids: &[PanelId]) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(panel) = panels.get_mut(*id) else {
                continue;
            };
            let ticket = panel.begin_refresh();
            let request = panel.request().clone();
            log::debug!("{}: refreshing via {}", id, request);
            handles.push(self.dispatch(ticket, request));
        }
        handles
    }

    pub fn refresh_all(&mut self, panels: &mut PanelSet) -> Vec<JoinHandle<()>> {
        let ids = panels.ids();
        self.refresh(panels, &ids)
    }

    /// Cancel every outstanding request.
    pub fn shutdown(&self) {
        self.root.cancel();
    }
}

impl Drop for PanelRefresher {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

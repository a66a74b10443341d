//! Headless snapshot mode
//!
//! Mounts every panel, refreshes them all once and prints the result.
//! Upstream failures only change what is printed, never the exit status.

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::environment::{Endpoints, Environment};
use crate::fusion::FusionReading;
use crate::panel::PanelSet;
use crate::workers::core::outcome_event;
use serde_json::{Value, json};
use std::error::Error;
use std::fmt::Write;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SnapshotFormat {
    Text,
    Json,
}

pub async fn run_snapshot(
    mut session: SessionData,
    format: SnapshotFormat,
) -> Result<(), Box<dyn Error>> {
    let text = format == SnapshotFormat::Text;
    if text {
        print_session_starting(
            "snapshot",
            &session.environment.to_string(),
            &session.endpoints,
            session.offline,
        );
    }

    let outcomes = session
        .panels
        .refresh_all(session.transport.as_ref())
        .await;

    if text {
        for (id, outcome) in outcomes {
            let Some(panel) = session.panels.get(id) else {
                continue;
            };
            let event = outcome_event(panel, outcome);
            if event.should_display() {
                println!("{}", event);
            }
        }
    }

    let fusion = FusionReading::compute(&session.panels);
    match format {
        SnapshotFormat::Text => {
            print!("{}", render_text(&session.panels, &fusion));
            print_session_exit_success();
        }
        SnapshotFormat::Json => {
            let document = snapshot_json(
                session.environment,
                &session.endpoints,
                &session.panels,
                &fusion,
            );
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }
    Ok(())
}

/// Plain-text rendering: one block per panel, then the fusion score.
pub fn render_text(panels: &PanelSet, fusion: &FusionReading) -> String {
    let mut out = String::new();
    for panel in panels.iter() {
        let _ = writeln!(out, "\n{} [{}]", panel.id().title(), panel.provenance());
        let rows = panel.rows();
        let width = rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
        for row in rows {
            let _ = writeln!(out, "  {:<width$}  {}", row.label, row.value, width = width);
        }
        if let Some(error) = panel.error() {
            let _ = writeln!(out, "  ! {}", error);
        }
    }
    let _ = writeln!(
        out,
        "\nSIGNAL FUSION {:.0} {} ({}/{} inputs fresh)",
        fusion.score,
        fusion.label(),
        fusion.fresh_inputs,
        fusion.total_inputs
    );
    out
}

pub fn snapshot_json(
    environment: Environment,
    endpoints: &Endpoints,
    panels: &PanelSet,
    fusion: &FusionReading,
) -> Value {
    let panels: Vec<Value> = panels
        .iter()
        .map(|panel| {
            json!({
                "id": panel.id(),
                "title": panel.id().title(),
                "provenance": panel.provenance(),
                "error": panel.error(),
                "latencyMs": panel.last_latency().map(|latency| latency.as_millis() as u64),
                "updatedAt": panel.last_updated().map(|at| at.to_rfc3339()),
                "value": panel.value_json(),
            })
        })
        .collect();

    json!({
        "environment": environment,
        "endpoints": endpoints,
        "fusion": fusion,
        "panels": panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds;
    use crate::network::OfflineTransport;
    use std::time::Duration;

    async fn offline_panels() -> PanelSet {
        let endpoints = Endpoints::for_environment(Environment::Mainnet);
        let mut panels = feeds::mount_all(&endpoints, Duration::from_millis(100));
        panels.refresh_all(&OfflineTransport).await;
        panels
    }

    #[tokio::test]
    async fn test_text_snapshot_shows_fallback_defaults() {
        let panels = offline_panels().await;
        let fusion = FusionReading::compute(&panels);
        let text = render_text(&panels, &fusion);

        assert!(text.contains("XRP QUOTE [fallback]"));
        assert!(text.contains("$3.1500"));
        assert!(text.contains("! offline mode"));
        assert!(text.contains("SIGNAL FUSION"));
    }

    #[tokio::test]
    async fn test_json_snapshot_shape() {
        let panels = offline_panels().await;
        let fusion = FusionReading::compute(&panels);
        let endpoints = Endpoints::for_environment(Environment::Testnet);
        let document = snapshot_json(Environment::Testnet, &endpoints, &panels, &fusion);

        assert_eq!(document["environment"], "testnet");
        assert_eq!(
            document["endpoints"]["xrplRpc"],
            "https://s.altnet.rippletest.net:51234/"
        );
        let entries = document["panels"].as_array().unwrap();
        assert_eq!(entries.len(), 6);

        let quote = entries
            .iter()
            .find(|entry| entry["id"] == "xrp_quote")
            .unwrap();
        assert_eq!(quote["provenance"], "fallback");
        assert_eq!(quote["value"]["price"], 3.15);
        assert_eq!(quote["value"]["marketCap"], 180_000_000_000.0);
        assert_eq!(quote["value"]["dominance"], 3.2);
        assert_eq!(document["fusion"]["freshInputs"], 0);
    }
}

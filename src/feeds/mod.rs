//! Concrete dashboard panels
//!
//! Each feed module owns a typed value, a parse function, a default payload
//! and a `spec` builder. [`mount_all`] assembles the full dashboard.

pub mod fee_stats;
pub mod format;
pub mod global_market;
pub mod ledger_status;
pub mod market_board;
pub mod prediction;
pub mod xrp_quote;

use crate::environment::Endpoints;
use crate::network::FetchError;
use crate::panel::{DataPanel, PanelSet};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Deserialize a response body. Shape mismatches are parse failures, not
/// transport errors.
pub(crate) fn decode<T: DeserializeOwned>(body: &Value) -> Result<T, FetchError> {
    T::deserialize(body).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Unwrap the `result` object of an XRPL JSON-RPC response, turning an
/// `"status": "error"` reply into a parse failure.
pub(crate) fn rpc_result(body: &Value) -> Result<&Value, FetchError> {
    let result = body
        .get("result")
        .ok_or_else(|| FetchError::Parse("missing 'result' object".to_string()))?;

    if result.get("status").and_then(Value::as_str) == Some("error") {
        let code = result
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        let message = result
            .get("error_message")
            .and_then(Value::as_str)
            .unwrap_or("");
        return Err(FetchError::Parse(format!("rpc error {}: {}", code, message)));
    }
    Ok(result)
}

/// Mount every dashboard panel with its default payload.
pub fn mount_all(endpoints: &Endpoints, cached_threshold: Duration) -> PanelSet {
    let mut panels = PanelSet::new();
    panels.insert(Box::new(DataPanel::mount(
        xrp_quote::spec(endpoints),
        cached_threshold,
    )));
    panels.insert(Box::new(DataPanel::mount(
        global_market::spec(endpoints),
        cached_threshold,
    )));
    panels.insert(Box::new(DataPanel::mount(
        market_board::spec(endpoints),
        cached_threshold,
    )));
    panels.insert(Box::new(DataPanel::mount(
        prediction::spec(),
        cached_threshold,
    )));
    panels.insert(Box::new(DataPanel::mount(
        ledger_status::spec(endpoints),
        cached_threshold,
    )));
    panels.insert(Box::new(DataPanel::mount(
        fee_stats::spec(endpoints),
        cached_threshold,
    )));
    panels
}

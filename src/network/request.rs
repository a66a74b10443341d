//! Request descriptions closed over by each panel

use serde_json::{Value, json};
use std::fmt::{Display, Formatter};

/// What a panel asks its transport for.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelRequest {
    /// Plain REST GET returning JSON.
    Get { url: String },
    /// XRPL-style JSON-RPC call, sent as a POST with `{"method", "params": [..]}`.
    JsonRpc {
        url: String,
        method: String,
        params: Value,
    },
    /// The panel has no backing integration and always shows its default payload.
    Unavailable,
}

impl PanelRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self::Get { url: url.into() }
    }

    pub fn json_rpc(url: impl Into<String>, method: impl Into<String>) -> Self {
        Self::JsonRpc {
            url: url.into(),
            method: method.into(),
            params: json!({}),
        }
    }

    /// Request body for JSON-RPC calls.
    pub fn rpc_body(&self) -> Option<Value> {
        match self {
            Self::JsonRpc { method, params, .. } => Some(json!({
                "method": method,
                "params": [params],
            })),
            _ => None,
        }
    }
}

impl Display for PanelRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get { url } => write!(f, "GET {}", url),
            Self::JsonRpc { url, method, .. } => write!(f, "RPC {} @ {}", method, url),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_body_wraps_params() {
        let request = PanelRequest::json_rpc("http://localhost:5005", "server_info");
        let body = request.rpc_body().unwrap();
        assert_eq!(body["method"], "server_info");
        assert!(body["params"].is_array());
        assert_eq!(body["params"][0], json!({}));
    }

    #[test]
    fn test_get_has_no_body() {
        assert!(PanelRequest::get("http://x").rpc_body().is_none());
        assert!(PanelRequest::Unavailable.rpc_body().is_none());
    }
}

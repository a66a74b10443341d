//! Node health from the XRPL `server_info` method

use super::format::or_na;
use super::{decode, rpc_result};
use crate::environment::Endpoints;
use crate::network::{FetchError, PanelRequest};
use crate::panel::{PanelId, PanelSpec, PanelValue, Row, Tone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStatus {
    pub server_state: String,
    pub validated_ledger: Option<u64>,
    pub load_factor: f64,
    pub peers: Option<u64>,
    pub base_fee_xrp: Option<f64>,
    pub reserve_base_xrp: Option<f64>,
    pub build_version: Option<String>,
}

impl Default for LedgerStatus {
    fn default() -> Self {
        Self {
            server_state: "unknown".to_string(),
            validated_ledger: None,
            load_factor: 1.0,
            peers: None,
            base_fee_xrp: Some(0.00001),
            reserve_base_xrp: Some(1.0),
            build_version: None,
        }
    }
}

impl LedgerStatus {
    /// Whether the node is synced with the network.
    pub fn is_healthy(&self) -> bool {
        matches!(
            self.server_state.as_str(),
            "full" | "proposing" | "validating"
        )
    }
}

impl PanelValue for LedgerStatus {
    fn rows(&self) -> Vec<Row> {
        let state_tone = if self.is_healthy() {
            Tone::Positive
        } else {
            Tone::Negative
        };
        vec![
            Row::new("State", self.server_state.clone()).with_tone(state_tone),
            Row::new("Validated", or_na(self.validated_ledger)).with_tone(Tone::Accent),
            Row::new("Load factor", format!("{:.2}", self.load_factor)),
            Row::new("Peers", or_na(self.peers)),
            Row::new(
                "Base fee",
                self.base_fee_xrp
                    .map(|fee| format!("{} XRP", fee))
                    .unwrap_or_else(|| "n/a".to_string()),
            ),
            Row::new(
                "Reserve",
                self.reserve_base_xrp
                    .map(|reserve| format!("{} XRP", reserve))
                    .unwrap_or_else(|| "n/a".to_string()),
            ),
            Row::new("Build", or_na(self.build_version.clone())),
        ]
    }

    /// Full health when synced, scaled down by server load.
    fn signal(&self) -> Option<f64> {
        let base = match self.server_state.as_str() {
            "full" | "proposing" | "validating" => 1.0,
            "tracking" | "syncing" | "connected" => 0.5,
            _ => 0.0,
        };
        Some(base / self.load_factor.max(1.0))
    }
}

#[derive(Debug, Deserialize)]
struct ServerInfoResult {
    info: ServerInfo,
}

#[derive(Debug, Deserialize)]
struct ServerInfo {
    server_state: String,
    #[serde(default)]
    load_factor: Option<f64>,
    #[serde(default)]
    peers: Option<u64>,
    #[serde(default)]
    build_version: Option<String>,
    #[serde(default)]
    validated_ledger: Option<ValidatedLedger>,
}

#[derive(Debug, Deserialize)]
struct ValidatedLedger {
    seq: u64,
    #[serde(default)]
    base_fee_xrp: Option<f64>,
    #[serde(default)]
    reserve_base_xrp: Option<f64>,
}

pub fn parse(body: &Value) -> Result<LedgerStatus, FetchError> {
    let result: ServerInfoResult = decode(rpc_result(body)?)?;
    let info = result.info;
    let validated = info.validated_ledger;

    Ok(LedgerStatus {
        server_state: info.server_state,
        validated_ledger: validated.as_ref().map(|ledger| ledger.seq),
        load_factor: info.load_factor.unwrap_or(1.0),
        peers: info.peers,
        base_fee_xrp: validated.as_ref().and_then(|ledger| ledger.base_fee_xrp),
        reserve_base_xrp: validated.as_ref().and_then(|ledger| ledger.reserve_base_xrp),
        build_version: info.build_version,
    })
}

pub fn spec(endpoints: &Endpoints) -> PanelSpec<LedgerStatus> {
    PanelSpec {
        id: PanelId::LedgerStatus,
        request: PanelRequest::json_rpc(endpoints.xrpl_rpc.clone(), "server_info"),
        parse,
        default: LedgerStatus::default(),
    }
}

//! Transaction cost levels from the XRPL `fee` method

use super::format::or_na;
use super::{decode, rpc_result};
use crate::environment::Endpoints;
use crate::network::{FetchError, PanelRequest};
use crate::panel::{PanelId, PanelSpec, PanelValue, Row, Tone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeStats {
    pub ledger_index: Option<u64>,
    pub current_ledger_size: u64,
    pub queue_size: u64,
    pub base_fee_drops: u64,
    pub median_fee_drops: u64,
    pub minimum_fee_drops: u64,
    pub open_ledger_fee_drops: u64,
}

impl Default for FeeStats {
    fn default() -> Self {
        Self {
            ledger_index: None,
            current_ledger_size: 0,
            queue_size: 0,
            base_fee_drops: 10,
            median_fee_drops: 5000,
            minimum_fee_drops: 10,
            open_ledger_fee_drops: 10,
        }
    }
}

impl FeeStats {
    /// How far the open-ledger cost has escalated above the base fee.
    pub fn escalation(&self) -> f64 {
        if self.base_fee_drops == 0 {
            return 1.0;
        }
        self.open_ledger_fee_drops as f64 / self.base_fee_drops as f64
    }
}

impl PanelValue for FeeStats {
    fn rows(&self) -> Vec<Row> {
        let escalation = self.escalation();
        let escalation_tone = if escalation > 1.0 {
            Tone::Negative
        } else {
            Tone::Positive
        };
        vec![
            Row::new("Ledger", or_na(self.ledger_index)).with_tone(Tone::Accent),
            Row::new("Open ledger", format!("{} drops", self.open_ledger_fee_drops)),
            Row::new("Escalation", format!("x{:.1}", escalation)).with_tone(escalation_tone),
            Row::new("Base", format!("{} drops", self.base_fee_drops)),
            Row::new("Median", format!("{} drops", self.median_fee_drops)),
            Row::new("Txns in ledger", self.current_ledger_size.to_string()),
            Row::new("Queued", self.queue_size.to_string()),
        ]
    }

    /// 1.0 with no fee escalation, falling as escalation grows.
    fn signal(&self) -> Option<f64> {
        Some((1.0 / self.escalation().max(1.0)).clamp(0.0, 1.0))
    }
}

#[derive(Debug, Deserialize)]
struct FeeResult {
    current_ledger_size: String,
    current_queue_size: String,
    #[serde(default)]
    ledger_current_index: Option<u64>,
    drops: FeeDrops,
}

#[derive(Debug, Deserialize)]
struct FeeDrops {
    base_fee: String,
    median_fee: String,
    minimum_fee: String,
    open_ledger_fee: String,
}

/// rippled reports drop amounts as decimal strings.
fn drops(field: &str, value: &str) -> Result<u64, FetchError> {
    value
        .parse::<u64>()
        .map_err(|_| FetchError::Parse(format!("{} is not a drop amount: {:?}", field, value)))
}

pub fn parse(body: &Value) -> Result<FeeStats, FetchError> {
    let result: FeeResult = decode(rpc_result(body)?)?;

    Ok(FeeStats {
        ledger_index: result.ledger_current_index,
        current_ledger_size: drops("current_ledger_size", &result.current_ledger_size)?,
        queue_size: drops("current_queue_size", &result.current_queue_size)?,
        base_fee_drops: drops("base_fee", &result.drops.base_fee)?,
        median_fee_drops: drops("median_fee", &result.drops.median_fee)?,
        minimum_fee_drops: drops("minimum_fee", &result.drops.minimum_fee)?,
        open_ledger_fee_drops: drops("open_ledger_fee", &result.drops.open_ledger_fee)?,
    })
}

pub fn spec(endpoints: &Endpoints) -> PanelSpec<FeeStats> {
    PanelSpec {
        id: PanelId::FeeStats,
        request: PanelRequest::json_rpc(endpoints.xrpl_rpc.clone(), "fee"),
        parse,
        default: FeeStats::default(),
    }
}

//! Whole-market totals from CoinGecko's global endpoint

use super::decode;
use super::format::{percent, percent_signed, usd_compact};
use crate::environment::Endpoints;
use crate::network::{FetchError, PanelRequest};
use crate::panel::{PanelId, PanelSpec, PanelValue, Row, Tone};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalMarket {
    pub total_market_cap: f64,
    pub total_volume: f64,
    pub btc_dominance: f64,
    pub xrp_dominance: f64,
    pub market_cap_change24h: f64,
}

impl Default for GlobalMarket {
    fn default() -> Self {
        Self {
            total_market_cap: 3_400_000_000_000.0,
            total_volume: 120_000_000_000.0,
            btc_dominance: 57.5,
            xrp_dominance: 3.2,
            market_cap_change24h: 1.4,
        }
    }
}

impl PanelValue for GlobalMarket {
    fn rows(&self) -> Vec<Row> {
        vec![
            Row::new("Total cap", usd_compact(self.total_market_cap)).with_tone(Tone::Accent),
            Row::new("24h", percent_signed(self.market_cap_change24h))
                .with_tone(Tone::for_change(self.market_cap_change24h)),
            Row::new("Volume", usd_compact(self.total_volume)),
            Row::new("BTC dom.", percent(self.btc_dominance)),
            Row::new("XRP dom.", percent(self.xrp_dominance)),
        ]
    }

    /// Market-wide 24h change mapped from [-5%, +5%] onto [0, 1].
    fn signal(&self) -> Option<f64> {
        Some(((self.market_cap_change24h + 5.0) / 10.0).clamp(0.0, 1.0))
    }
}

#[derive(Debug, Deserialize)]
struct GlobalResponse {
    data: GlobalData,
}

#[derive(Debug, Deserialize)]
struct GlobalData {
    total_market_cap: HashMap<String, f64>,
    total_volume: HashMap<String, f64>,
    market_cap_percentage: HashMap<String, f64>,
    #[serde(default)]
    market_cap_change_percentage_24h_usd: Option<f64>,
}

pub fn parse(body: &Value) -> Result<GlobalMarket, FetchError> {
    let response: GlobalResponse = decode(body)?;
    let data = response.data;
    let usd = |map: &HashMap<String, f64>, what: &str| {
        map.get("usd")
            .copied()
            .ok_or_else(|| FetchError::Parse(format!("no usd entry for {}", what)))
    };

    Ok(GlobalMarket {
        total_market_cap: usd(&data.total_market_cap, "total_market_cap")?,
        total_volume: usd(&data.total_volume, "total_volume")?,
        btc_dominance: data.market_cap_percentage.get("btc").copied().unwrap_or_default(),
        xrp_dominance: data.market_cap_percentage.get("xrp").copied().unwrap_or_default(),
        market_cap_change24h: data.market_cap_change_percentage_24h_usd.unwrap_or_default(),
    })
}

pub fn spec(endpoints: &Endpoints) -> PanelSpec<GlobalMarket> {
    PanelSpec {
        id: PanelId::GlobalMarket,
        request: PanelRequest::get(endpoints.coingecko_path("global")),
        parse,
        default: GlobalMarket::default(),
    }
}

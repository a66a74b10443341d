//! XRP spot quote from CoinGecko's simple price endpoint

use super::decode;
use super::format::{percent, percent_signed, usd_compact, usd_price};
use crate::environment::Endpoints;
use crate::network::{FetchError, PanelRequest};
use crate::panel::{PanelId, PanelSpec, PanelValue, Row, Tone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const COIN_ID: &str = "ripple";
const VS_CURRENCY: &str = "usd";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XrpQuote {
    pub price: f64,
    pub change24h: f64,
    pub volume24h: f64,
    pub market_cap: f64,
    /// Share of total crypto market cap. The simple price endpoint does not
    /// report it, so live quotes leave it empty.
    pub dominance: Option<f64>,
}

impl Default for XrpQuote {
    fn default() -> Self {
        Self {
            price: 3.15,
            change24h: 5.8,
            volume24h: 8_500_000_000.0,
            market_cap: 180_000_000_000.0,
            dominance: Some(3.2),
        }
    }
}

impl PanelValue for XrpQuote {
    fn rows(&self) -> Vec<Row> {
        vec![
            Row::new("Price", usd_price(self.price)).with_tone(Tone::Accent),
            Row::new("24h", percent_signed(self.change24h))
                .with_tone(Tone::for_change(self.change24h)),
            Row::new("Volume", usd_compact(self.volume24h)),
            Row::new("Market cap", usd_compact(self.market_cap)),
            Row::new(
                "Dominance",
                self.dominance
                    .map(percent)
                    .unwrap_or_else(|| "n/a".to_string()),
            ),
        ]
    }

    /// 24h momentum mapped from [-10%, +10%] onto [0, 1].
    fn signal(&self) -> Option<f64> {
        Some(((self.change24h + 10.0) / 20.0).clamp(0.0, 1.0))
    }
}

#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    ripple: Option<CoinQuote>,
}

#[derive(Debug, Deserialize)]
struct CoinQuote {
    usd: f64,
    #[serde(default)]
    usd_24h_change: Option<f64>,
    #[serde(default)]
    usd_24h_vol: Option<f64>,
    #[serde(default)]
    usd_market_cap: Option<f64>,
}

pub fn parse(body: &Value) -> Result<XrpQuote, FetchError> {
    let response: SimplePriceResponse = decode(body)?;
    let quote = response
        .ripple
        .ok_or_else(|| FetchError::Parse(format!("no '{}' entry in response", COIN_ID)))?;

    Ok(XrpQuote {
        price: quote.usd,
        change24h: quote.usd_24h_change.unwrap_or_default(),
        volume24h: quote.usd_24h_vol.unwrap_or_default(),
        market_cap: quote.usd_market_cap.unwrap_or_default(),
        dominance: None,
    })
}

pub fn spec(endpoints: &Endpoints) -> PanelSpec<XrpQuote> {
    let path = format!(
        "simple/price?ids={}&vs_currencies={}&include_market_cap=true&include_24hr_vol=true&include_24hr_change=true",
        urlencoding::encode(COIN_ID),
        urlencoding::encode(VS_CURRENCY)
    );
    PanelSpec {
        id: PanelId::XrpQuote,
        request: PanelRequest::get(endpoints.coingecko_path(&path)),
        parse,
        default: XrpQuote::default(),
    }
}

//! Top coins by market cap from CoinGecko's markets endpoint

use super::decode;
use super::format::{percent_signed, usd_price};
use crate::environment::Endpoints;
use crate::network::{FetchError, PanelRequest};
use crate::panel::{PanelId, PanelSpec, PanelValue, Row, Tone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const PER_PAGE: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRow {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change24h: f64,
}

impl MarketRow {
    fn new(symbol: &str, name: &str, price: f64, change24h: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change24h,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketBoard {
    pub rows: Vec<MarketRow>,
}

impl Default for MarketBoard {
    fn default() -> Self {
        Self {
            rows: vec![
                MarketRow::new("BTC", "Bitcoin", 97_500.0, 1.8),
                MarketRow::new("ETH", "Ethereum", 3_450.0, 2.4),
                MarketRow::new("XRP", "XRP", 3.15, 5.8),
                MarketRow::new("SOL", "Solana", 210.0, -0.9),
                MarketRow::new("BNB", "BNB", 690.0, 0.6),
                MarketRow::new("DOGE", "Dogecoin", 0.38, -1.7),
            ],
        }
    }
}

impl PanelValue for MarketBoard {
    fn rows(&self) -> Vec<Row> {
        self.rows
            .iter()
            .map(|row| {
                Row::new(
                    row.symbol.clone(),
                    format!("{}  {}", usd_price(row.price), percent_signed(row.change24h)),
                )
                .with_tone(Tone::for_change(row.change24h))
            })
            .collect()
    }

    /// Market breadth: share of listed coins that are up on the day.
    fn signal(&self) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let advancing = self.rows.iter().filter(|row| row.change24h > 0.0).count();
        Some(advancing as f64 / self.rows.len() as f64)
    }
}

#[derive(Debug, Deserialize)]
struct CoinMarket {
    symbol: String,
    name: String,
    current_price: Option<f64>,
    price_change_percentage_24h: Option<f64>,
}

pub fn parse(body: &Value) -> Result<MarketBoard, FetchError> {
    let markets: Vec<CoinMarket> = decode(body)?;
    let rows: Vec<MarketRow> = markets
        .into_iter()
        // Delisted or halted coins come back without a price
        .filter_map(|market| {
            Some(MarketRow {
                symbol: market.symbol.to_uppercase(),
                name: market.name,
                price: market.current_price?,
                change24h: market.price_change_percentage_24h.unwrap_or_default(),
            })
        })
        .collect();

    if rows.is_empty() {
        return Err(FetchError::Parse("market list is empty".to_string()));
    }
    Ok(MarketBoard { rows })
}

pub fn spec(endpoints: &Endpoints) -> PanelSpec<MarketBoard> {
    let path = format!(
        "coins/markets?vs_currency=usd&order=market_cap_desc&per_page={}&page=1",
        PER_PAGE
    );
    PanelSpec {
        id: PanelId::MarketBoard,
        request: PanelRequest::get(endpoints.coingecko_path(&path)),
        parse,
        default: MarketBoard::default(),
    }
}

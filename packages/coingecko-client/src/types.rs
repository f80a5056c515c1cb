use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry of the `/simple/price` response map (USD only).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimplePrice {
    pub usd: f64,
    pub usd_24h_change: f64,
    /// Unix seconds.
    pub last_updated_at: i64,
}

impl SimplePrice {
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.last_updated_at, 0)
    }
}

/// Subset of the `/coins/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDetails {
    pub market_cap_rank: u32,
    pub market_data: MarketData,
    pub description: Description,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketData {
    pub market_cap: UsdValue,
    pub total_volume: UsdValue,
}

/// A per-currency amount map, reduced to the USD entry.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UsdValue {
    pub usd: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Description {
    /// English description. Null or absent for some coins.
    #[serde(default)]
    pub en: Option<String>,
}

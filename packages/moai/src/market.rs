//! Market data retrieval and its rendering into [`NewsItem`]s.

use async_trait::async_trait;
use chrono::{DateTime, Local, Utc};
use coingecko_client::{CoinDetails, CoinGeckoClient, CoinGeckoError, SimplePrice};
use tracing::{debug, info};

use crate::coins::Coin;
use crate::error::{FetchFailure, MarketError};
use crate::traits::MarketDataSource;
use crate::types::NewsItem;

/// Descriptions longer than this many characters are cut.
pub const DESCRIPTION_LIMIT: usize = 1000;

const TRUNCATION_MARKER: &str = "...";

pub const PRICE_TITLE: &str = "Güncel Fiyat ve Değişim";
pub const MARKET_TITLE: &str = "Piyasa Bilgisi";
pub const DESCRIPTION_TITLE: &str = "Coin Hakkında";

/// Price and market data for one coin at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub current_price_usd: f64,
    pub change_24h_percent: f64,
    pub last_updated_at: DateTime<Utc>,
    pub market_cap_rank: u32,
    pub market_cap_usd: f64,
    pub volume_24h_usd: f64,
    /// Already truncated to [`DESCRIPTION_LIMIT`] characters.
    pub description: String,
}

impl MarketSnapshot {
    pub fn from_responses(price: SimplePrice, details: CoinDetails) -> Result<Self, FetchFailure> {
        let last_updated_at = price
            .last_updated()
            .ok_or(FetchFailure::InvalidTimestamp(price.last_updated_at))?;

        Ok(Self {
            current_price_usd: price.usd,
            change_24h_percent: price.usd_24h_change,
            last_updated_at,
            market_cap_rank: details.market_cap_rank,
            market_cap_usd: details.market_data.market_cap.usd,
            volume_24h_usd: details.market_data.total_volume.usd,
            description: truncate_description(details.description.en.as_deref().unwrap_or("")),
        })
    }

    /// Two or three items: price, market info, and the description when
    /// there is one.
    pub fn news_items(&self) -> Vec<NewsItem> {
        let mut items = Vec::with_capacity(3);

        let updated = self.last_updated_at.with_timezone(&Local).format("%H:%M:%S");
        items.push(NewsItem::new(
            PRICE_TITLE,
            format!(
                "Şu anki fiyat: ${:.2}\n24 saatlik değişim: {:.2}%\nSon güncelleme: {}",
                self.current_price_usd, self.change_24h_percent, updated
            ),
        ));

        items.push(NewsItem::new(
            MARKET_TITLE,
            format!(
                "Piyasa Değeri Sıralaması: #{}\nPiyasa Değeri: ${}\n24s İşlem Hacmi: ${}",
                self.market_cap_rank,
                format_grouped(self.market_cap_usd),
                format_grouped(self.volume_24h_usd)
            ),
        ));

        if !self.description.is_empty() {
            items.push(NewsItem::new(DESCRIPTION_TITLE, self.description.clone()));
        }

        items
    }
}

/// Cut to [`DESCRIPTION_LIMIT`] characters and mark the cut.
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{}", &description[..cut], TRUNCATION_MARKER),
        None => description.to_string(),
    }
}

/// Two decimals with comma thousands separators, e.g. `1,234,567.89`.
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn simple_price(&self, coin_id: &str) -> Result<SimplePrice, CoinGeckoError> {
        CoinGeckoClient::simple_price(self, coin_id).await
    }

    async fn coin_details(&self, coin_id: &str) -> Result<CoinDetails, CoinGeckoError> {
        CoinGeckoClient::coin_details(self, coin_id).await
    }
}

/// Fetches both API responses for a coin and combines them.
pub struct MarketDataFetcher<S> {
    source: S,
}

impl<S: MarketDataSource> MarketDataFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn fetch(&self, coin: Coin) -> Result<MarketSnapshot, FetchFailure> {
        let id = coin.api_id();

        let price = self
            .source
            .simple_price(id)
            .await
            .map_err(FetchFailure::Price)?;
        debug!(coin_id = id, usd = price.usd, "Price fetched");

        let details = self
            .source
            .coin_details(id)
            .await
            .map_err(FetchFailure::Details)?;

        MarketSnapshot::from_responses(price, details)
    }

    /// Resolve a lowercase coin name and fetch its items.
    ///
    /// An unknown name fails before any request is made.
    pub async fn collect(&self, name: &str) -> Result<Vec<NewsItem>, MarketError> {
        let coin = Coin::lookup(name)?;
        let items = self.fetch(coin).await?.news_items();
        info!(coin = %coin, count = items.len(), "Market data collected");
        Ok(items)
    }
}

//! Pure CoinGecko REST API client.
//!
//! A minimal client for the two read endpoints needed to describe a coin:
//! `/simple/price` and `/coins/{id}`. Requests can go straight to CoinGecko
//! or through a gateway that mirrors its path layout.
//!
//! # Example
//!
//! ```rust,ignore
//! use coingecko_client::CoinGeckoClient;
//!
//! let client = CoinGeckoClient::new("http://localhost:3001/api/coingecko");
//!
//! let price = client.simple_price("bitcoin").await?;
//! println!("{} USD ({:.2}%)", price.usd, price.usd_24h_change);
//! ```

pub mod error;
pub mod types;

pub use error::{CoinGeckoError, Result};
pub use types::{CoinDetails, Description, MarketData, SimplePrice, UsdValue};

use std::collections::HashMap;

use serde::de::DeserializeOwned;

pub const PUBLIC_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Header understood by the local gateway.
const GATEWAY_KEY_HEADER: &str = "x-api-key";

/// Header understood by the CoinGecko pro API.
const PRO_KEY_HEADER: &str = "x-cg-pro-api-key";

#[derive(Clone)]
pub struct CoinGeckoClient {
    client: reqwest::Client,
    base_url: String,
    gateway_key: Option<String>,
    pro_api_key: Option<String>,
}

impl CoinGeckoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            gateway_key: None,
            pro_api_key: None,
        }
    }

    /// Send `x-api-key` on every request.
    pub fn with_gateway_key(mut self, key: impl Into<String>) -> Self {
        self.gateway_key = Some(key.into());
        self
    }

    /// Send `x-cg-pro-api-key` on every request.
    pub fn with_pro_api_key(mut self, key: impl Into<String>) -> Self {
        self.pro_api_key = Some(key.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current USD price, 24h change and last update time for one coin id.
    pub async fn simple_price(&self, coin_id: &str) -> Result<SimplePrice> {
        let mut prices: HashMap<String, SimplePrice> = self
            .get_json(
                "simple/price",
                &[
                    ("ids", coin_id),
                    ("vs_currencies", "usd"),
                    ("include_24hr_change", "true"),
                    ("include_last_updated_at", "true"),
                ],
            )
            .await?;

        prices
            .remove(coin_id)
            .ok_or_else(|| CoinGeckoError::MissingCoin(coin_id.to_string()))
    }

    /// Market metadata and description, without tickers or community data.
    pub async fn coin_details(&self, coin_id: &str) -> Result<CoinDetails> {
        self.get_json(
            &format!("coins/{}", coin_id),
            &[
                ("localization", "false"),
                ("tickers", "false"),
                ("community_data", "false"),
                ("developer_data", "false"),
            ],
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut request = self.client.get(&url).query(query);
        if let Some(key) = &self.gateway_key {
            request = request.header(GATEWAY_KEY_HEADER, key);
        }
        if let Some(key) = &self.pro_api_key {
            request = request.header(PRO_KEY_HEADER, key);
        }

        tracing::debug!(%url, "Calling CoinGecko API");
        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "CoinGecko API error");
            return Err(CoinGeckoError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

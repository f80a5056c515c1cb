//! Seams between the pipelines and the outside world.
//!
//! Production code plugs in the CoinGecko client, the OpenAI client and a
//! headless browser session; tests plug in the mocks from [`crate::testing`].

use async_trait::async_trait;
use coingecko_client::{CoinDetails, CoinGeckoError, SimplePrice};
use openai_client::OpenAIError;

use crate::error::ScrapeResult;

/// Read access to the pricing API.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn simple_price(&self, coin_id: &str) -> Result<SimplePrice, CoinGeckoError>;

    async fn coin_details(&self, coin_id: &str) -> Result<CoinDetails, CoinGeckoError>;
}

/// A chat completion backend.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send one system and one user message, return the reply text.
    async fn complete(&self, model: &str, system: &str, user: &str) -> Result<String, OpenAIError>;
}

/// The subset of page automation the news scraper needs.
///
/// Elements are addressed by selector and document-order index every time
/// instead of by handle, because navigating back re-renders the listing.
#[async_trait]
pub trait NewsPage: Send {
    async fn goto(&mut self, url: &str) -> ScrapeResult<()>;

    async fn scroll_by(&mut self, pixels: u32) -> ScrapeResult<()>;

    /// Number of elements currently matching `selector`.
    async fn count(&mut self, selector: &str) -> ScrapeResult<usize>;

    /// Visible text of the `index`-th element matching `selector`.
    async fn text_at(&mut self, selector: &str, index: usize) -> ScrapeResult<String>;

    /// Click the `index`-th element matching `selector`.
    async fn click_at(&mut self, selector: &str, index: usize) -> ScrapeResult<()>;

    /// History back.
    async fn go_back(&mut self) -> ScrapeResult<()>;
}

//! Mock implementations of the seams in [`crate::traits`].
//!
//! They return canned data and record every call, so pipelines can be
//! exercised without network access or a browser.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coingecko_client::{CoinDetails, CoinGeckoError, Description, MarketData, SimplePrice, UsdValue};
use openai_client::OpenAIError;

use crate::error::{ScrapeError, ScrapeResult};
use crate::traits::{ChatModel, MarketDataSource, NewsPage};

// =============================================================================
// Market data
// =============================================================================

/// Canned pricing API keyed by coin id. Unknown ids fail like a 404.
#[derive(Default, Clone)]
pub struct MockMarketSource {
    prices: Arc<Mutex<HashMap<String, SimplePrice>>>,
    details: Arc<Mutex<HashMap<String, CoinDetails>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockMarketSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(self, coin_id: &str, usd: f64, usd_24h_change: f64, last_updated_at: i64) -> Self {
        self.prices.lock().unwrap().insert(
            coin_id.to_string(),
            SimplePrice {
                usd,
                usd_24h_change,
                last_updated_at,
            },
        );
        self
    }

    pub fn with_details(
        self,
        coin_id: &str,
        rank: u32,
        market_cap: f64,
        volume: f64,
        description: Option<&str>,
    ) -> Self {
        self.details.lock().unwrap().insert(
            coin_id.to_string(),
            CoinDetails {
                market_cap_rank: rank,
                market_data: MarketData {
                    market_cap: UsdValue { usd: market_cap },
                    total_volume: UsdValue { usd: volume },
                },
                description: Description {
                    en: description.map(str::to_string),
                },
            },
        );
        self
    }

    /// Requested paths, e.g. `simple/price:bitcoin`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn not_found(coin_id: &str) -> CoinGeckoError {
        CoinGeckoError::Api {
            status: 404,
            message: format!("coin not found: {}", coin_id),
        }
    }
}

#[async_trait]
impl MarketDataSource for MockMarketSource {
    async fn simple_price(&self, coin_id: &str) -> Result<SimplePrice, CoinGeckoError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("simple/price:{}", coin_id));
        self.prices
            .lock()
            .unwrap()
            .get(coin_id)
            .cloned()
            .ok_or_else(|| Self::not_found(coin_id))
    }

    async fn coin_details(&self, coin_id: &str) -> Result<CoinDetails, CoinGeckoError> {
        self.calls.lock().unwrap().push(format!("coins:{}", coin_id));
        self.details
            .lock()
            .unwrap()
            .get(coin_id)
            .cloned()
            .ok_or_else(|| Self::not_found(coin_id))
    }
}

// =============================================================================
// Chat model
// =============================================================================

/// One recorded chat completion call.
#[derive(Debug, Clone)]
pub struct ChatCall {
    pub model: String,
    pub system: String,
    pub user: String,
}

#[derive(Clone)]
pub struct MockChatModel {
    reply: Option<String>,
    calls: Arc<Mutex<Vec<ChatCall>>>,
}

impl MockChatModel {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: Arc::default(),
        }
    }

    /// Every call fails with an authentication error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<ChatCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn complete(&self, model: &str, system: &str, user: &str) -> Result<String, OpenAIError> {
        self.calls.lock().unwrap().push(ChatCall {
            model: model.to_string(),
            system: system.to_string(),
            user: user.to_string(),
        });
        self.reply
            .clone()
            .ok_or_else(|| OpenAIError::Api("401 Unauthorized: invalid api key".into()))
    }
}

// =============================================================================
// News page
// =============================================================================

/// A headline on the mock listing and what happens when it is opened.
#[derive(Debug, Clone)]
pub struct MockHeadline {
    pub title: String,
    /// `None` means the detail view has no body element.
    pub body: Option<String>,
    pub click_fails: bool,
}

impl MockHeadline {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Some(body.into()),
            click_fails: false,
        }
    }

    pub fn without_body(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            click_fails: false,
        }
    }

    pub fn unclickable(title: impl Into<String>) -> Self {
        Self {
            click_fails: true,
            ..Self::without_body(title)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Goto(String),
    Scroll(u32),
    Click(usize),
    Back,
}

/// In-memory listing page with one detail view per headline.
///
/// Selectors are not interpreted: on the listing every query addresses the
/// headlines, on a detail view every query addresses the body.
#[derive(Debug, Default)]
pub struct MockNewsPage {
    headlines: Vec<MockHeadline>,
    fail_goto: bool,
    open_detail: Option<usize>,
    events: Vec<PageEvent>,
}

impl MockNewsPage {
    pub fn new(headlines: Vec<MockHeadline>) -> Self {
        Self {
            headlines,
            ..Self::default()
        }
    }

    /// The listing URL never loads.
    pub fn unreachable() -> Self {
        Self {
            fail_goto: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[PageEvent] {
        &self.events
    }

    pub fn clicks(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PageEvent::Click(i) => Some(*i),
                _ => None,
            })
            .collect()
    }

    pub fn on_listing(&self) -> bool {
        self.open_detail.is_none()
    }

    fn missing(selector: &str, index: usize) -> ScrapeError {
        ScrapeError::ElementMissing {
            selector: selector.to_string(),
            index,
        }
    }
}

#[async_trait]
impl NewsPage for MockNewsPage {
    async fn goto(&mut self, url: &str) -> ScrapeResult<()> {
        self.events.push(PageEvent::Goto(url.to_string()));
        if self.fail_goto {
            return Err(ScrapeError::Navigation {
                url: url.to_string(),
                reason: "net::ERR_NAME_NOT_RESOLVED".into(),
            });
        }
        self.open_detail = None;
        Ok(())
    }

    async fn scroll_by(&mut self, pixels: u32) -> ScrapeResult<()> {
        self.events.push(PageEvent::Scroll(pixels));
        Ok(())
    }

    async fn count(&mut self, _selector: &str) -> ScrapeResult<usize> {
        Ok(match self.open_detail {
            None => self.headlines.len(),
            Some(i) => usize::from(self.headlines[i].body.is_some()),
        })
    }

    async fn text_at(&mut self, selector: &str, index: usize) -> ScrapeResult<String> {
        match self.open_detail {
            None => self
                .headlines
                .get(index)
                .map(|h| h.title.clone())
                .ok_or_else(|| Self::missing(selector, index)),
            Some(i) => self.headlines[i]
                .body
                .clone()
                .filter(|_| index == 0)
                .ok_or_else(|| Self::missing(selector, index)),
        }
    }

    async fn click_at(&mut self, selector: &str, index: usize) -> ScrapeResult<()> {
        self.events.push(PageEvent::Click(index));
        let clickable = self.open_detail.is_none()
            && self.headlines.get(index).is_some_and(|h| !h.click_fails);
        if !clickable {
            return Err(Self::missing(selector, index));
        }
        self.open_detail = Some(index);
        Ok(())
    }

    async fn go_back(&mut self) -> ScrapeResult<()> {
        self.events.push(PageEvent::Back);
        self.open_detail = None;
        Ok(())
    }
}

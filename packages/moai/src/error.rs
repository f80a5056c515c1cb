//! Failure taxonomy for both pipelines.
//!
//! Every variant keeps its underlying cause so callers can log it, even when
//! the user only ever sees a single coarse message.

use coingecko_client::CoinGeckoError;
use openai_client::OpenAIError;
use thiserror::Error;

/// A coin name that is not in the fixed lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name} desteklenen coinler arasında değil")]
pub struct UnsupportedCoin {
    pub name: String,
}

/// Market data could not be retrieved or decoded.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("price request failed: {0}")]
    Price(#[source] CoinGeckoError),

    #[error("coin details request failed: {0}")]
    Details(#[source] CoinGeckoError),

    #[error("last update timestamp {0} is out of range")]
    InvalidTimestamp(i64),
}

#[derive(Debug, Error)]
pub enum MarketError {
    #[error(transparent)]
    UnsupportedCoin(#[from] UnsupportedCoin),

    #[error(transparent)]
    Fetch(#[from] FetchFailure),
}

/// The language model call failed.
#[derive(Debug, Error)]
#[error("summarization failed: {0}")]
pub struct SummarizationFailure(#[from] pub OpenAIError);

pub type ScrapeResult<T> = std::result::Result<T, ScrapeError>;

/// Errors raised while driving the browser.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The browser process could not be started or attached to.
    #[error("browser session could not start: {0}")]
    Session(String),

    /// The listing page could not be loaded.
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("no element at index {index} for selector {selector:?}")]
    ElementMissing { selector: String, index: usize },

    #[error("browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),
}

impl ScrapeError {
    /// Whether this error aborts the whole run rather than a single headline.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Session(_) | Self::Navigation { .. })
    }
}

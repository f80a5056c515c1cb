//! MOAI data collection pipelines.
//!
//! Two independent batch jobs share this crate:
//!
//! - **Market summarizer**: coin name → [`coins::Coin`] → [`market::MarketDataFetcher`]
//!   → [`summarizer::TextSummarizer`] → console.
//! - **News scraper**: coin name → [`scraper::BrowserSession`] → [`scraper::ArticleExtractor`]
//!   → [`emitter`] → stdout JSON.
//!
//! External services sit behind the traits in [`traits`]; [`testing`] has
//! mock implementations for all of them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use coingecko_client::CoinGeckoClient;
//! use moai::{market::MarketDataFetcher, summarizer::TextSummarizer};
//! use openai_client::OpenAIClient;
//!
//! let fetcher = MarketDataFetcher::new(CoinGeckoClient::new("http://localhost:3001/api/coingecko"));
//! let items = fetcher.collect("bitcoin").await?;
//!
//! let summary = TextSummarizer::new(OpenAIClient::from_env()?).summarize(&items).await;
//! println!("{summary}");
//! ```

pub mod coins;
pub mod config;
pub mod emitter;
pub mod error;
pub mod market;
pub mod scraper;
pub mod summarizer;
pub mod telemetry;
pub mod testing;
pub mod traits;
pub mod types;

pub use coins::Coin;
pub use config::{BrowserSettings, ScraperConfig, SummarizerConfig};
pub use error::{FetchFailure, MarketError, ScrapeError, SummarizationFailure, UnsupportedCoin};
pub use market::{MarketDataFetcher, MarketSnapshot};
pub use summarizer::TextSummarizer;
pub use traits::{ChatModel, MarketDataSource, NewsPage};
pub use types::NewsItem;

//! Headline scraping through a headless browser.
//!
//! - [`browser`] owns the Chromium process and implements [`crate::traits::NewsPage`]
//! - [`navigator`] applies the fixed settle/scroll timing
//! - [`extractor`] walks the listing headline by headline

pub mod browser;
pub mod extractor;
pub mod navigator;

pub use browser::BrowserSession;
pub use extractor::ArticleExtractor;
pub use navigator::PageNavigator;

use tracing::info;

use crate::config::ScraperConfig;
use crate::error::ScrapeResult;
use crate::types::NewsItem;

/// Launch a browser, scrape the listing for `coin`, and shut the browser
/// down again whatever the outcome.
pub async fn scrape_news(config: &ScraperConfig, coin: &str) -> ScrapeResult<Vec<NewsItem>> {
    let url = config.listing_url(coin);
    info!(%url, "Scraping news");

    let mut session = BrowserSession::launch(&config.browser).await?;
    let result = ArticleExtractor::new(config).run(&mut session, &url).await;
    session.close().await;

    result
}

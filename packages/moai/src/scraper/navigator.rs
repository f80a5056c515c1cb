use std::time::Duration;

use tracing::debug;

use crate::error::{ScrapeError, ScrapeResult};
use crate::traits::NewsPage;

/// Fixed-delay navigation: every page change is followed by a settle wait
/// and, where content loads lazily, a scroll and a second wait.
#[derive(Debug, Clone)]
pub struct PageNavigator {
    settle_delay: Duration,
    scroll_pixels: u32,
}

impl PageNavigator {
    pub fn new(settle_delay: Duration, scroll_pixels: u32) -> Self {
        Self {
            settle_delay,
            scroll_pixels,
        }
    }

    pub async fn settle(&self) {
        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }
    }

    pub async fn scroll_and_settle<P: NewsPage>(&self, page: &mut P) -> ScrapeResult<()> {
        page.scroll_by(self.scroll_pixels).await?;
        self.settle().await;
        Ok(())
    }

    /// Load the listing and nudge lazy content into the DOM.
    ///
    /// Any failure here is reported as [`ScrapeError::Navigation`].
    pub async fn open_listing<P: NewsPage>(&self, page: &mut P, url: &str) -> ScrapeResult<()> {
        debug!(%url, "Opening listing");

        self.load(page, url).await.map_err(|e| match e {
            nav @ ScrapeError::Navigation { .. } => nav,
            other => ScrapeError::Navigation {
                url: url.to_string(),
                reason: other.to_string(),
            },
        })
    }

    async fn load<P: NewsPage>(&self, page: &mut P, url: &str) -> ScrapeResult<()> {
        page.goto(url).await?;
        self.settle().await;
        self.scroll_and_settle(page).await
    }
}

//! Headless Chromium session driven over CDP.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Element, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::BrowserSettings;
use crate::error::{ScrapeError, ScrapeResult};
use crate::traits::NewsPage;

const HANDLER_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// An owned browser process with a single tab.
///
/// Call [`BrowserSession::close`] when done. If the session is dropped
/// without it, the event pump is aborted and the process is killed by
/// `Browser`'s own drop.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler: Option<JoinHandle<()>>,
}

impl BrowserSession {
    pub async fn launch(settings: &BrowserSettings) -> ScrapeResult<Self> {
        let mut builder = BrowserConfig::builder();
        if !settings.headless {
            builder = builder.with_head();
        }
        if !settings.sandbox {
            builder = builder.no_sandbox();
        }
        if settings.disable_dev_shm {
            builder = builder.arg("--disable-dev-shm-usage");
        }
        if let Some(path) = &settings.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(ScrapeError::Session)?;

        let (mut browser, mut events) = Browser::launch(config)
            .await
            .map_err(|e| ScrapeError::Session(e.to_string()))?;

        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if let Err(e) = event {
                    debug!(error = %e, "CDP event error");
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                let _ = browser.close().await;
                handler.abort();
                return Err(ScrapeError::Session(e.to_string()));
            }
        };

        debug!("Browser session started");
        Ok(Self {
            browser,
            page,
            handler: Some(handler),
        })
    }

    /// Shut the browser down. Consumes the session so it runs once.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!(error = %e, "Browser did not close cleanly");
        }
        if let Some(handler) = self.handler.take() {
            if tokio::time::timeout(HANDLER_SHUTDOWN_TIMEOUT, handler)
                .await
                .is_err()
            {
                warn!("CDP event handler did not stop in time");
            }
        }
        debug!("Browser session closed");
    }

    async fn element_at(&self, selector: &str, index: usize) -> ScrapeResult<Element> {
        self.page
            .find_elements(selector)
            .await?
            .into_iter()
            .nth(index)
            .ok_or_else(|| ScrapeError::ElementMissing {
                selector: selector.to_string(),
                index,
            })
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Some(handler) = self.handler.take() {
            handler.abort();
        }
    }
}

#[async_trait]
impl NewsPage for BrowserSession {
    async fn goto(&mut self, url: &str) -> ScrapeResult<()> {
        self.page
            .goto(url)
            .await
            .map_err(|e| ScrapeError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn scroll_by(&mut self, pixels: u32) -> ScrapeResult<()> {
        self.page
            .evaluate(format!("window.scrollBy(0, {});", pixels))
            .await?;
        Ok(())
    }

    async fn count(&mut self, selector: &str) -> ScrapeResult<usize> {
        Ok(self.page.find_elements(selector).await?.len())
    }

    async fn text_at(&mut self, selector: &str, index: usize) -> ScrapeResult<String> {
        let element = self.element_at(selector, index).await?;
        let text = element.inner_text().await?.unwrap_or_default();
        Ok(text.trim().to_string())
    }

    async fn click_at(&mut self, selector: &str, index: usize) -> ScrapeResult<()> {
        self.element_at(selector, index).await?.click().await?;
        Ok(())
    }

    async fn go_back(&mut self) -> ScrapeResult<()> {
        self.page.evaluate("window.history.back();").await?;
        Ok(())
    }
}

use tracing::{info, warn};

use crate::config::{ScraperConfig, MAX_ARTICLES};
use crate::error::ScrapeResult;
use crate::scraper::navigator::PageNavigator;
use crate::traits::NewsPage;
use crate::types::NewsItem;

/// Visits the first few headlines of a listing and reads each article body.
#[derive(Debug, Clone)]
pub struct ArticleExtractor {
    navigator: PageNavigator,
    headline_selector: String,
    body_selector: String,
    max_articles: usize,
}

impl ArticleExtractor {
    pub fn new(config: &ScraperConfig) -> Self {
        Self {
            navigator: PageNavigator::new(config.settle_delay, config.scroll_pixels),
            headline_selector: config.headline_selector.clone(),
            body_selector: config.body_selector.clone(),
            max_articles: config.max_articles.min(MAX_ARTICLES),
        }
    }

    /// Open the listing and extract up to `max_articles` articles.
    ///
    /// A headline that fails at any step is logged and left out; the rest
    /// keep their document order. Failing to open the listing fails the run.
    pub async fn run<P: NewsPage>(&self, page: &mut P, listing_url: &str) -> ScrapeResult<Vec<NewsItem>> {
        self.navigator.open_listing(page, listing_url).await?;

        let found = page.count(&self.headline_selector).await?;
        let take = found.min(self.max_articles);
        info!(found, take, "Headlines located");

        let mut items = Vec::with_capacity(take);
        for index in 0..take {
            match self.extract_one(page, index).await {
                Ok(item) => items.push(item),
                Err(e) => warn!("{}. başlık işlenirken hata oluştu: {}", index + 1, e),
            }
        }

        info!(count = items.len(), "Articles extracted");
        Ok(items)
    }

    async fn extract_one<P: NewsPage>(&self, page: &mut P, index: usize) -> ScrapeResult<NewsItem> {
        let title = page.text_at(&self.headline_selector, index).await?;
        page.click_at(&self.headline_selector, index).await?;

        let content = self.read_body(page).await;

        // Once the detail view is open, go back even if the body was missing
        // so the next headline is looked up on the listing.
        if let Err(e) = self.return_to_listing(page).await {
            warn!(index = index + 1, error = %e, "Could not return to listing");
        }

        Ok(NewsItem::new(title, content?))
    }

    async fn read_body<P: NewsPage>(&self, page: &mut P) -> ScrapeResult<String> {
        self.navigator.settle().await;
        self.navigator.scroll_and_settle(page).await?;
        page.text_at(&self.body_selector, 0).await
    }

    async fn return_to_listing<P: NewsPage>(&self, page: &mut P) -> ScrapeResult<()> {
        page.go_back().await?;
        self.navigator.settle().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::{MockHeadline, MockNewsPage, PageEvent};

    fn extractor() -> ArticleExtractor {
        ArticleExtractor::new(&ScraperConfig {
            settle_delay: Duration::ZERO,
            ..ScraperConfig::default()
        })
    }

    fn headlines(n: usize) -> Vec<MockHeadline> {
        (1..=n)
            .map(|i| MockHeadline::new(format!("Başlık {}", i), format!("Gövde {}", i)))
            .collect()
    }

    #[tokio::test]
    async fn test_caps_at_five_headlines() {
        let mut page = MockNewsPage::new(headlines(8));

        let items = extractor().run(&mut page, "https://news.test").await.unwrap();

        assert_eq!(items.len(), 5);
        assert_eq!(items[4], NewsItem::new("Başlık 5", "Gövde 5"));
        assert_eq!(page.clicks(), vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_config_cannot_raise_the_cap() {
        let extractor = ArticleExtractor::new(&ScraperConfig {
            settle_delay: Duration::ZERO,
            max_articles: 50,
            ..ScraperConfig::default()
        });
        let mut page = MockNewsPage::new(headlines(9));

        assert_eq!(extractor.run(&mut page, "https://news.test").await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_fewer_headlines_than_cap() {
        let mut page = MockNewsPage::new(headlines(2));

        let items = extractor().run(&mut page, "https://news.test").await.unwrap();

        assert_eq!(
            items,
            vec![
                NewsItem::new("Başlık 1", "Gövde 1"),
                NewsItem::new("Başlık 2", "Gövde 2"),
            ]
        );
        assert!(page.on_listing());
    }

    #[tokio::test]
    async fn test_missing_body_is_skipped_and_page_recovers() {
        let mut list = headlines(4);
        list[1] = MockHeadline::without_body("Kırık");
        let mut page = MockNewsPage::new(list);

        let items = extractor().run(&mut page, "https://news.test").await.unwrap();

        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Başlık 1", "Başlık 3", "Başlık 4"]);
        assert_eq!(
            page.events().iter().filter(|e| **e == PageEvent::Back).count(),
            4
        );
    }

    #[tokio::test]
    async fn test_failed_click_does_not_navigate_back() {
        let mut list = headlines(3);
        list[0] = MockHeadline::unclickable("Tıklanamaz");
        let mut page = MockNewsPage::new(list);

        let items = extractor().run(&mut page, "https://news.test").await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Başlık 2");
        assert_eq!(
            page.events().iter().filter(|e| **e == PageEvent::Back).count(),
            2
        );
    }

    #[tokio::test]
    async fn test_detail_view_is_scrolled_before_reading() {
        let mut page = MockNewsPage::new(headlines(1));

        extractor().run(&mut page, "https://news.test/x").await.unwrap();

        assert_eq!(
            page.events(),
            &[
                PageEvent::Goto("https://news.test/x".into()),
                PageEvent::Scroll(1000),
                PageEvent::Click(0),
                PageEvent::Scroll(1000),
                PageEvent::Back,
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_listing_yields_no_items() {
        let mut page = MockNewsPage::new(vec![]);
        let items = extractor().run(&mut page, "https://news.test").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_listing_fails_whole_run() {
        let mut page = MockNewsPage::unreachable();

        let err = extractor().run(&mut page, "https://news.test").await.unwrap_err();

        assert!(err.is_fatal());
        assert!(page.clicks().is_empty());
    }
}

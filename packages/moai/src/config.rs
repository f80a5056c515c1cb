use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

/// Most headlines processed per run.
pub const MAX_ARTICLES: usize = 5;

/// Market Summarizer configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Not validated; an empty key fails on the first model call.
    pub openai_api_key: String,
    pub openai_base_url: Option<String>,
    pub openai_model: String,
    pub gateway_url: String,
    pub gateway_api_key: Option<String>,
    pub coingecko_pro_api_key: Option<String>,
}

impl SummarizerConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: env::var("OPENAI_BASE_URL").ok(),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| crate::summarizer::DEFAULT_MODEL.to_string()),
            gateway_url: env::var("COINGECKO_GATEWAY_URL")
                .unwrap_or_else(|_| "http://localhost:3001/api/coingecko".to_string()),
            gateway_api_key: env::var("GATEWAY_API_KEY").ok(),
            coingecko_pro_api_key: env::var("COINGECKO_PRO_API_KEY").ok(),
        })
    }
}

/// How the headless browser is launched.
#[derive(Debug, Clone)]
pub struct BrowserSettings {
    pub headless: bool,
    pub sandbox: bool,
    /// Pass `--disable-dev-shm-usage` so Chrome does not rely on a small /dev/shm.
    pub disable_dev_shm: bool,
    pub chrome_executable: Option<PathBuf>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: false,
            disable_dev_shm: true,
            chrome_executable: None,
        }
    }
}

/// News Scraper configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Listing URL with a `{coin}` placeholder.
    pub listing_url_template: String,
    pub headline_selector: String,
    pub body_selector: String,
    pub max_articles: usize,
    /// Fixed wait after every navigation and scroll.
    pub settle_delay: Duration,
    pub scroll_pixels: u32,
    pub browser: BrowserSettings,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            listing_url_template: "https://coinmarketcap.com/currencies/{coin}/news/".to_string(),
            headline_selector:
                ".sc-65e7f566-0.cUjpUw.news_title.top-news-title, .sc-65e7f566-0.cUjpUw.news_title"
                    .to_string(),
            body_selector: ".sc-aef7b723-0".to_string(),
            max_articles: MAX_ARTICLES,
            settle_delay: Duration::from_secs(2),
            scroll_pixels: 1000,
            browser: BrowserSettings::default(),
        }
    }
}

impl ScraperConfig {
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();
        let defaults = Self::default();

        Ok(Self {
            listing_url_template: env::var("NEWS_LISTING_URL_TEMPLATE")
                .unwrap_or(defaults.listing_url_template),
            headline_selector: env::var("NEWS_HEADLINE_SELECTOR")
                .unwrap_or(defaults.headline_selector),
            body_selector: env::var("NEWS_BODY_SELECTOR").unwrap_or(defaults.body_selector),
            max_articles: parse_var("NEWS_MAX_ARTICLES", defaults.max_articles)?
                .min(MAX_ARTICLES),
            settle_delay: Duration::from_millis(parse_var(
                "NEWS_SETTLE_MS",
                defaults.settle_delay.as_millis() as u64,
            )?),
            scroll_pixels: parse_var("NEWS_SCROLL_PIXELS", defaults.scroll_pixels)?,
            browser: BrowserSettings {
                chrome_executable: env::var_os("CHROME_PATH").map(PathBuf::from),
                ..defaults.browser
            },
        })
    }

    /// Substitute the coin name verbatim into the listing template.
    pub fn listing_url(&self, coin: &str) -> String {
        self.listing_url_template.replace("{coin}", coin)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", name)),
        Err(_) => Ok(default),
    }
}

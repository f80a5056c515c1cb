use serde::{Deserialize, Serialize};

/// A titled block of text.
///
/// The summarizer builds these from market data; the scraper builds them
/// from a headline and its article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub content: String,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

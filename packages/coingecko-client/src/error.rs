use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoinGeckoError>;

#[derive(Debug, Error)]
pub enum CoinGeckoError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The price map had no entry for the requested id.
    #[error("no price data for coin id {0}")]
    MissingCoin(String),
}

// Interactive market summary for one coin

use std::io::{self, Write};

use anyhow::{Context, Result};
use coingecko_client::CoinGeckoClient;
use dialoguer::Input;
use moai::{telemetry, Coin, MarketDataFetcher, MarketError, SummarizerConfig, TextSummarizer};
use openai_client::OpenAIClient;

const COIN_PROMPT: &str = "Hangi coin hakkında bilgi almak istersiniz?";
const NO_DATA: &str = "Veri bulunamadı veya bir hata oluştu.";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    telemetry::init("warn,moai=info");

    let config = SummarizerConfig::from_env().context("Failed to load configuration")?;
    if config.openai_api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set, summary requests will be rejected");
    }

    let mut coingecko = CoinGeckoClient::new(config.gateway_url.as_str());
    if let Some(key) = &config.gateway_api_key {
        coingecko = coingecko.with_gateway_key(key.as_str());
    }
    if let Some(key) = &config.coingecko_pro_api_key {
        coingecko = coingecko.with_pro_api_key(key.as_str());
    }

    let mut openai = OpenAIClient::new(config.openai_api_key.as_str());
    if let Some(url) = &config.openai_base_url {
        openai = openai.with_base_url(url.as_str());
    }

    tracing::debug!(
        gateway = coingecko.base_url(),
        openai = openai.base_url(),
        model = %config.openai_model,
        "Clients configured"
    );

    let fetcher = MarketDataFetcher::new(coingecko);
    let summarizer = TextSummarizer::new(openai).with_model_name(config.openai_model.as_str());

    println!("Desteklenen coinler: {}", Coin::supported_names());
    println!();
    let coin_name = prompt_coin_name()?;

    println!("\nVeriler toplanıyor...");
    match fetcher.collect(&coin_name.to_lowercase()).await {
        Ok(items) => {
            println!("{} veri noktası toplandı.", items.len());

            println!("\nVeriler analiz ediliyor...");
            let summary = summarizer.summarize(&items).await;
            println!("\nÖzet:");
            println!("{}", summary);
        }
        Err(MarketError::UnsupportedCoin(e)) => {
            println!("Hata: {}.", e);
            println!("Desteklenen coinler: {}", Coin::supported_names());
            println!("\n{}", NO_DATA);
        }
        Err(MarketError::Fetch(e)) => {
            tracing::warn!(error = %e, "Market data fetch failed");
            println!("Veri alınırken hata oluştu: {}", e);
            println!("\n{}", NO_DATA);
        }
    }

    Ok(())
}

fn prompt_coin_name() -> Result<String> {
    if console::user_attended() {
        return Input::<String>::new()
            .with_prompt(COIN_PROMPT)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read coin name");
    }

    // Piped input: plain line read
    print!("{}: ", COIN_PROMPT);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read coin name")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

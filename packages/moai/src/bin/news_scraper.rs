// Scrape the latest headlines for a coin and print them as one JSON line

use std::io;
use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use moai::{emitter, scraper, telemetry, NewsItem, ScraperConfig};

#[derive(Parser)]
#[command(name = "news-scraper", about = "Scrape coin news headlines and article bodies")]
struct Cli {
    /// Coin name, substituted verbatim into the listing URL
    #[arg(allow_hyphen_values = true)]
    coin: String,

    /// Anything after the coin name is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::MissingRequiredArgument => {
                eprintln!("Coin adı gerekli!");
                return ExitCode::from(1);
            }
            _ => {
                eprint!("{}", e);
                return ExitCode::from(1);
            }
        },
    };

    telemetry::init("warn,moai=info");

    let items = collect(&cli.coin).await;
    if let Err(e) = emitter::emit(&items, io::stdout().lock()) {
        tracing::error!(error = %e, "Failed to write output");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Never fails: any top-level error is logged and yields no items.
async fn collect(coin: &str) -> Vec<NewsItem> {
    let config = match ScraperConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Hata oluştu: {:#}", e);
            return Vec::new();
        }
    };

    match scraper::scrape_news(&config, coin).await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(fatal = e.is_fatal(), "Hata oluştu: {}", e);
            Vec::new()
        }
    }
}

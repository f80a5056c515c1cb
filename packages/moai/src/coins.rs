//! Fixed mapping from user-facing coin names to CoinGecko ids.

use std::fmt;
use std::str::FromStr;

use crate::error::UnsupportedCoin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    Bitcoin,
    Ethereum,
    Arbitrum,
    Solana,
    Avalanche,
    Cardano,
    Polkadot,
}

impl Coin {
    /// Every supported coin, in display order.
    pub const ALL: [Coin; 7] = [
        Coin::Bitcoin,
        Coin::Ethereum,
        Coin::Arbitrum,
        Coin::Solana,
        Coin::Avalanche,
        Coin::Cardano,
        Coin::Polkadot,
    ];

    /// Short name as typed by the user.
    pub fn name(self) -> &'static str {
        match self {
            Coin::Bitcoin => "bitcoin",
            Coin::Ethereum => "ethereum",
            Coin::Arbitrum => "arbitrum",
            Coin::Solana => "solana",
            Coin::Avalanche => "avalanche",
            Coin::Cardano => "cardano",
            Coin::Polkadot => "polkadot",
        }
    }

    /// Canonical CoinGecko identifier.
    pub fn api_id(self) -> &'static str {
        match self {
            Coin::Avalanche => "avalanche-2",
            other => other.name(),
        }
    }

    /// Exact lookup. Callers lowercase the input first; nothing else is
    /// normalized.
    pub fn lookup(name: &str) -> Result<Coin, UnsupportedCoin> {
        Self::ALL
            .into_iter()
            .find(|coin| coin.name() == name)
            .ok_or_else(|| UnsupportedCoin {
                name: name.to_string(),
            })
    }

    /// Comma separated list of supported names.
    pub fn supported_names() -> String {
        Self::ALL.map(Coin::name).join(", ")
    }
}

impl FromStr for Coin {
    type Err = UnsupportedCoin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coin::lookup(s)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

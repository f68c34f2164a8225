//! CoinGecko market listing client.

use std::time::Duration;

use async_trait::async_trait;

use super::MarketDataSource;
use crate::error::MarketError;
use crate::model::{MarketRecord, TradingPair};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko client configuration
#[derive(Clone, Debug)]
pub struct CoinGeckoConfig {
    /// API root, without the `/coins/markets` suffix
    pub base_url: String,

    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl CoinGeckoConfig {
    /// `COINGECKO_API_URL` overrides the API root; nothing is required.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("COINGECKO_API_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = url;
        }
        config
    }

    fn markets_url(&self) -> String {
        format!("{}/coins/markets", self.base_url.trim_end_matches('/'))
    }
}

/// Market data from CoinGecko's `/coins/markets` listing
pub struct CoinGeckoClient {
    client: reqwest::Client,
    config: CoinGeckoConfig,
}

impl CoinGeckoClient {
    pub fn new(config: CoinGeckoConfig) -> Result<Self, MarketError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub const fn config(&self) -> &CoinGeckoConfig {
        &self.config
    }

    /// Map a ticker to CoinGecko's coin id; unknown symbols pass through
    /// unchanged so full ids like `bitcoin` keep working.
    ///
    /// The `ids` query therefore carries the coin id, not the raw symbol:
    /// `/coins/markets` matches on ids only, so `ids=btc` would always come
    /// back empty.
    pub fn coin_id(symbol: &str) -> &str {
        match symbol {
            "btc" => "bitcoin",
            "eth" => "ethereum",
            "sol" => "solana",
            "usdt" => "tether",
            "usdc" => "usd-coin",
            "bnb" => "binancecoin",
            "xrp" => "ripple",
            "ada" => "cardano",
            "doge" => "dogecoin",
            "dot" => "polkadot",
            "ltc" => "litecoin",
            "link" => "chainlink",
            "avax" => "avalanche-2",
            "matic" => "matic-network",
            "atom" => "cosmos",
            "uni" => "uniswap",
            "bch" => "bitcoin-cash",
            "shib" => "shiba-inu",
            other => other,
        }
    }

    /// One listing request; `Ok(None)` when the provider knows no such coin
    pub async fn fetch(&self, pair: &TradingPair) -> Result<Option<MarketRecord>, MarketError> {
        let response = self
            .client
            .get(self.config.markets_url())
            .header("accept", "application/json")
            .query(&[
                ("vs_currency", pair.currency()),
                ("ids", Self::coin_id(pair.symbol())),
                ("price_change_percentage", "7d"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(MarketError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        let records: Vec<MarketRecord> = serde_json::from_str(&body)?;
        Ok(records.into_iter().next())
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn market_record(&self, pair: &TradingPair) -> Option<MarketRecord> {
        match self.fetch(pair).await {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                tracing::info!(pair = %pair, "CoinGecko has no listing for pair");
                None
            }
            Err(e) => {
                tracing::warn!(pair = %pair, "CoinGecko API error: {}", e);
                None
            }
        }
    }

    fn name(&self) -> &str {
        "CoinGecko"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CoinGeckoConfig::default();
        assert_eq!(config.markets_url(), "https://api.coingecko.com/api/v3/coins/markets");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_override() {
        let config = CoinGeckoConfig::from_lookup(|key| {
            (key == "COINGECKO_API_URL").then(|| "http://localhost:8080/api/".to_string())
        });
        assert_eq!(config.markets_url(), "http://localhost:8080/api/coins/markets");
    }

    #[test]
    fn test_coin_id_aliases() {
        assert_eq!(CoinGeckoClient::coin_id("btc"), "bitcoin");
        assert_eq!(CoinGeckoClient::coin_id("avax"), "avalanche-2");
        assert_eq!(CoinGeckoClient::coin_id("bitcoin"), "bitcoin");
        assert_eq!(CoinGeckoClient::coin_id("notacoin"), "notacoin");
    }
}

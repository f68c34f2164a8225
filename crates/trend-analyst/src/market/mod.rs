//! Market Data Integration
//!
//! Abstractions and implementations for market-data providers.

mod coingecko;
mod fixed;

pub use coingecko::{CoinGeckoClient, CoinGeckoConfig};
pub use fixed::StaticMarketSource;

use async_trait::async_trait;

use crate::model::{MarketRecord, TradingPair};

/// Market-data source trait (Strategy pattern)
///
/// Implementations fold every failure into `None` and do their own logging;
/// callers only ever see "found" or "not found".
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Current market record for a pair
    async fn market_record(&self, pair: &TradingPair) -> Option<MarketRecord>;

    /// Source name
    fn name(&self) -> &str;
}

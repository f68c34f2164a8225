//! Static Market Source
//!
//! In-memory records keyed by pair. For tests and offline demos.

use std::collections::HashMap;

use async_trait::async_trait;

use super::MarketDataSource;
use crate::model::{MarketRecord, TradingPair};

#[derive(Clone, Debug, Default)]
pub struct StaticMarketSource {
    records: HashMap<TradingPair, MarketRecord>,
}

impl StaticMarketSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the record served for `pair`
    pub fn with_record(mut self, pair: TradingPair, record: MarketRecord) -> Self {
        self.records.insert(pair, record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl MarketDataSource for StaticMarketSource {
    async fn market_record(&self, pair: &TradingPair) -> Option<MarketRecord> {
        self.records.get(pair).cloned()
    }

    fn name(&self) -> &str {
        "StaticMarket"
    }
}

//! # trend-analyst
//!
//! Fetches market data for a cryptocurrency pair and asks a completion
//! provider for a short technical trend summary.
//!
//! ## Request flow
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  "/analyze eth-eur"                                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  pair        ETH/EUR                                         │
//! │  market      GET /coins/markets?vs_currency=eur&ids=ethereum │
//! │  prompt      price, 24h/7d change, market cap, volume        │
//! │  completion  POST /chat/completions                          │
//! │  reply       "🔍 ETH/EUR Analysis:\n\n…"                     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is retained between requests.

pub mod analyst;
pub mod completion;
pub mod error;
pub mod market;
pub mod model;
pub mod pair;
pub mod prompt;
pub mod reply;

pub use analyst::TrendAnalyst;
pub use completion::CompletionClient;
pub use error::{AnalysisError, MarketError, Result};
pub use market::{CoinGeckoClient, CoinGeckoConfig, MarketDataSource, StaticMarketSource};
pub use model::{AnalysisPrompt, AnalysisText, MarketRecord, TradingPair, ANALYSIS_UNAVAILABLE};

//! Domain Models
//!
//! Per-request data types for a trend analysis.
//! Market figures use `rust_decimal` - never f64 for money!

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quote currency used when the user gives only a symbol
pub const DEFAULT_CURRENCY: &str = "usd";

/// A (symbol, currency) market identifier, both lowercase
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradingPair {
    symbol: String,
    currency: String,
}

impl TradingPair {
    pub fn new(symbol: impl AsRef<str>, currency: impl AsRef<str>) -> Self {
        Self {
            symbol: symbol.as_ref().to_lowercase(),
            currency: currency.as_ref().to_lowercase(),
        }
    }

    /// Pair quoted in the default currency
    pub fn in_default_currency(symbol: impl AsRef<str>) -> Self {
        Self::new(symbol, DEFAULT_CURRENCY)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Display label, e.g. `BTC/USD`
    pub fn label(&self) -> String {
        format!("{}/{}", self.symbol.to_uppercase(), self.currency.to_uppercase())
    }
}

impl std::fmt::Display for TradingPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// One market listing row from the data provider.
///
/// Providers send `null` for figures they do not track; those stay `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRecord {
    /// Current price in the quote currency
    pub current_price: Option<Decimal>,

    /// 24-hour price change percentage
    pub price_change_percentage_24h: Option<Decimal>,

    /// Market capitalization in the quote currency
    pub market_cap: Option<Decimal>,

    /// 24-hour traded volume in the quote currency
    pub total_volume: Option<Decimal>,

    /// 7-day price change percentage
    #[serde(
        rename = "price_change_percentage_7d_in_currency",
        alias = "price_change_percentage_7d"
    )]
    pub price_change_percentage_7d: Option<Decimal>,
}

/// Prompt text sent to the completion provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisPrompt(String);

impl AnalysisPrompt {
    pub(crate) const fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AnalysisPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shown in place of an analysis when the completion provider fails
pub const ANALYSIS_UNAVAILABLE: &str =
    "⚠️ Analysis service is currently unavailable. Please try again later.";

/// Outcome of the completion step
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisText {
    /// Provider text, verbatim
    Generated(String),

    /// Provider unreachable or unusable; renders as [`ANALYSIS_UNAVAILABLE`]
    Unavailable,
}

impl AnalysisText {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Generated(text) => text,
            Self::Unavailable => ANALYSIS_UNAVAILABLE,
        }
    }

    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

//! Error Types for the Trend Analyst

use thiserror::Error;

use crate::model::TradingPair;
use crate::reply;

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Request-level failure kinds, each mapped to exactly one reply text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no trading pair supplied")]
    MissingPair,

    #[error("malformed trading pair: {0}")]
    MalformedPair(String),

    #[error("market data unavailable for {0}")]
    DataUnavailable(TradingPair),

    #[error("{0}")]
    Unexpected(String),
}

impl AnalysisError {
    /// Reply sent back to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingPair => reply::MISSING_PAIR.into(),
            Self::MalformedPair(raw) => reply::malformed_pair(raw),
            Self::DataUnavailable(pair) => reply::data_unavailable(pair),
            Self::Unexpected(description) => reply::unexpected(description),
        }
    }
}

/// Market-data client internals; never crosses `MarketDataSource`
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Provider returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

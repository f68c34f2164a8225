//! Command argument parsing
//!
//! Turns the text after `/analyze` into a [`TradingPair`]. Accepted forms are
//! `<symbol>` (quoted in USD) and `<symbol>-<currency>`. Anything with more than
//! one separator, or an empty side, is rejected rather than guessed at.

use crate::error::{AnalysisError, Result};
use crate::model::TradingPair;

const SEPARATOR: char = '-';

/// First whitespace-separated token of the command arguments, if any
pub fn first_token(args: &str) -> Option<&str> {
    args.split_whitespace().next()
}

/// Parse the raw pair argument
pub fn parse_pair(input: Option<&str>) -> Result<TradingPair> {
    let raw = input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AnalysisError::MissingPair)?;

    let mut parts = raw.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(symbol), None, _) => Ok(TradingPair::in_default_currency(symbol)),
        (Some(symbol), Some(currency), None) if !symbol.is_empty() && !currency.is_empty() => {
            Ok(TradingPair::new(symbol, currency))
        }
        _ => Err(AnalysisError::MalformedPair(raw.to_string())),
    }
}

//! Reply texts sent back to the chat user.

use crate::model::{AnalysisText, TradingPair};

pub const GREETING: &str = "📈 Crypto Analysis Bot Ready!\n\
    Use /analyze <pair> (e.g. /analyze eth-usd) to get trend analysis";

pub const MISSING_PAIR: &str = "⚠️ Please specify a pair (e.g. /analyze btc-usd)";

pub fn malformed_pair(raw: &str) -> String {
    format!("⚠️ Invalid pair '{raw}'. Use <symbol> or <symbol>-<currency> (e.g. /analyze eth-usd)")
}

pub fn data_unavailable(pair: &TradingPair) -> String {
    format!("❌ Failed to fetch market data for {}", pair.label())
}

pub fn unexpected(description: &str) -> String {
    format!("⚠️ Error: {description}")
}

/// Wrap an analysis (real or fallback) under its pair label
pub fn analysis(pair: &TradingPair, text: &AnalysisText) -> String {
    format!("🔍 {} Analysis:\n\n{}", pair.label(), text.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ANALYSIS_UNAVAILABLE;

    #[test]
    fn test_greeting_lines() {
        let lines: Vec<&str> = GREETING.lines().collect();
        assert_eq!(lines, [
            "📈 Crypto Analysis Bot Ready!",
            "Use /analyze <pair> (e.g. /analyze eth-usd) to get trend analysis",
        ]);
    }

    #[test]
    fn test_analysis_wrapper() {
        let pair = TradingPair::new("sol", "eur");
        let reply = analysis(&pair, &AnalysisText::Generated("Sideways.".into()));
        assert_eq!(reply, "🔍 SOL/EUR Analysis:\n\nSideways.");

        let reply = analysis(&pair, &AnalysisText::Unavailable);
        assert!(reply.ends_with(ANALYSIS_UNAVAILABLE));
    }

    #[test]
    fn test_malformed_pair_echoes_input() {
        assert!(malformed_pair("btc-usd-eur").contains("'btc-usd-eur'"));
    }
}

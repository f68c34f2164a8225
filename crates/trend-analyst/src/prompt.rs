//! Prompt Builder
//!
//! Renders the fixed analysis template from a pair and its market record.
//! Market cap is shown in billions and volume in millions, both to two
//! decimals; any figure the provider left out renders as `N/A`.
//!
//! Figures are exact decimals, so the text differs slightly from a float
//! rendering: percentages print normalized (`5%`, not `5.0%`) and two-decimal
//! rounding is half away from zero on the true value.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::model::{AnalysisPrompt, MarketRecord, TradingPair};

const NOT_AVAILABLE: &str = "N/A";
const BILLION: Decimal = dec!(1_000_000_000);
const MILLION: Decimal = dec!(1_000_000);

/// Build the completion prompt for one pair
pub fn build_prompt(pair: &TradingPair, record: &MarketRecord) -> AnalysisPrompt {
    let text = format!(
        "As a professional crypto trading analyst, provide technical analysis for {label} using:\n\
         - Current price: {price}\n\
         - 24h Change: {change_24h}\n\
         - Market Cap: {market_cap}\n\
         - 24h Volume: {volume}\n\
         - 7-Day Price Movement: {change_7d}\n\
         \n\
         Provide concise analysis covering:\n\
         1. Current trend direction\n\
         2. Key support/resistance levels\n\
         3. Entry/exit strategy\n\
         4. Risk management suggestions",
        label = pair.label(),
        price = money(record.current_price),
        change_24h = percent(record.price_change_percentage_24h),
        market_cap = scaled_money(record.market_cap, BILLION, "B"),
        volume = scaled_money(record.total_volume, MILLION, "M"),
        change_7d = percent(record.price_change_percentage_7d),
    );

    AnalysisPrompt::new(text)
}

fn money(value: Option<Decimal>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.into(), |v| format!("${}", v.normalize()))
}

fn percent(value: Option<Decimal>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.into(), |v| format!("{}%", v.normalize()))
}

fn scaled_money(value: Option<Decimal>, unit: Decimal, suffix: &str) -> String {
    value.map_or_else(
        || NOT_AVAILABLE.into(),
        |v| {
            let mut scaled = (v / unit).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            scaled.rescale(2);
            format!("${scaled}{suffix}")
        },
    )
}

//! Trend Analyst
//!
//! Drives one `/analyze` request end to end:
//!
//! ```text
//! parse pair ─▶ fetch market record ─▶ build prompt ─▶ complete ─▶ reply
//!     │                 │
//!     └─ missing /      └─ not found
//!        malformed
//! ```
//!
//! Every path ends in exactly one reply string. Panics inside the pipeline are
//! caught here and reported as a generic error reply.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::completion::CompletionClient;
use crate::error::{AnalysisError, Result};
use crate::market::MarketDataSource;
use crate::pair;
use crate::prompt;
use crate::reply;

pub struct TrendAnalyst {
    market: Arc<dyn MarketDataSource>,
    completion: CompletionClient,
}

impl TrendAnalyst {
    pub fn new(market: Arc<dyn MarketDataSource>, completion: CompletionClient) -> Self {
        Self { market, completion }
    }

    /// Reply to the greeting command
    pub const fn greeting(&self) -> &'static str {
        reply::GREETING
    }

    /// Reply to `/analyze <args>`; only the first token of `args` is used
    pub async fn analyze(&self, args: &str) -> String {
        self.respond(pair::first_token(args)).await
    }

    /// Reply for an already-extracted pair argument
    pub async fn respond(&self, input: Option<&str>) -> String {
        match AssertUnwindSafe(self.run(input)).catch_unwind().await {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                match &e {
                    AnalysisError::MissingPair | AnalysisError::MalformedPair(_) => {
                        tracing::debug!("rejected pair argument: {}", e);
                    }
                    _ => tracing::info!("analysis aborted: {}", e),
                }
                e.user_message()
            }
            Err(payload) => {
                let description = panic_description(payload.as_ref());
                tracing::error!(input = ?input, "analysis pipeline panicked: {}", description);
                AnalysisError::Unexpected(description).user_message()
            }
        }
    }

    async fn run(&self, input: Option<&str>) -> Result<String> {
        let pair = pair::parse_pair(input)?;
        tracing::info!(pair = %pair, source = self.market.name(), "analysis requested");

        let record = self
            .market
            .market_record(&pair)
            .await
            .ok_or_else(|| AnalysisError::DataUnavailable(pair.clone()))?;

        let prompt = prompt::build_prompt(&pair, &record);
        let text = self.completion.analyze(&prompt).await;

        Ok(reply::analysis(&pair, &text))
    }
}

fn panic_description(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "internal error".into())
}

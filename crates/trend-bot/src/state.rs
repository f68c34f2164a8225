//! Application State

use std::sync::Arc;

use trend_analyst::TrendAnalyst;

/// Shared, immutable state injected into every command handler
#[derive(Clone)]
pub struct AppState {
    pub analyst: Arc<TrendAnalyst>,
}

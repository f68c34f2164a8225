//! Crypto trend bot
//!
//! Telegram long-polling front end for the trend analyst:
//! `/start` greets, `/analyze <pair>` replies with a market trend summary.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trend_analyst::{CoinGeckoClient, CompletionClient, TrendAnalyst};
use trend_runtime::DeepSeekProvider;

use crate::config::BotConfig;
use crate::handlers::Command;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BotConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let provider = Arc::new(DeepSeekProvider::new(config.deepseek)?);
    let market = Arc::new(CoinGeckoClient::new(config.coingecko)?);
    tracing::info!(
        model = %config.generation.model,
        market_url = %market.config().base_url,
        completion_url = %provider.config().base_url,
        "providers ready"
    );

    let analyst = TrendAnalyst::new(market, CompletionClient::new(provider, config.generation));
    let state = AppState {
        analyst: Arc::new(analyst),
    };

    let bot = Bot::new(config.telegram_token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!("⚠ Could not register command menu: {}", e);
    }

    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(handlers::answer);

    tracing::info!("🤖 Starting bot with polling method...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("Bot stopped");
    Ok(())
}

//! Telegram command handlers

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use trend_analyst::TrendAnalyst;

use crate::state::AppState;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Crypto trend analysis commands:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
    #[command(description = "trend analysis for a pair, e.g. /analyze eth-usd")]
    Analyze(String),
}

/// Reply text for one command
pub async fn reply_for(command: &Command, analyst: &TrendAnalyst) -> String {
    match command {
        Command::Start => analyst.greeting().to_string(),
        Command::Analyze(args) => analyst.analyze(args).await,
    }
}

/// Dispatcher endpoint; one reply per command
pub async fn answer(bot: Bot, msg: Message, cmd: Command, state: AppState) -> ResponseResult<()> {
    tracing::info!(chat_id = msg.chat.id.0, command = ?cmd, "command received");

    let text = reply_for(&cmd, &state.analyst).await;
    bot.send_message(msg.chat.id, text).await?;

    Ok(())
}

//! Process configuration
//!
//! Built once in `main` from the environment (after `.env` is loaded) and
//! handed to the components by value.

use trend_analyst::CoinGeckoConfig;
use trend_core::{CoreError, GenerationOptions, Result};
use trend_runtime::DeepSeekConfig;

#[derive(Clone)]
pub struct BotConfig {
    /// Telegram bot token
    pub telegram_token: String,

    /// Completion provider settings, including the API key
    pub deepseek: DeepSeekConfig,

    /// Market-data provider settings
    pub coingecko: CoinGeckoConfig,

    /// Model and sampling settings for every analysis
    pub generation: GenerationOptions,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_token", &"<redacted>")
            .field("deepseek", &self.deepseek)
            .field("coingecko", &self.coingecko)
            .field("generation", &self.generation)
            .finish()
    }
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_token = lookup("TELEGRAM_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| CoreError::Config("TELEGRAM_TOKEN is not set".into()))?;

        let deepseek = DeepSeekConfig::from_lookup(&lookup)?;
        let coingecko = CoinGeckoConfig::from_lookup(&lookup);

        let mut generation = GenerationOptions::default();
        if let Some(model) = lookup("DEEPSEEK_MODEL").filter(|m| !m.trim().is_empty()) {
            generation = generation.with_model(model);
        }

        Ok(Self {
            telegram_token,
            deepseek,
            coingecko,
            generation,
        })
    }
}

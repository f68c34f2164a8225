//! # trend-runtime
//!
//! Completion providers for the trend bot.
//!
//! ## Providers
//!
//! - **DeepSeek** (default): hosted chat-completion API
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trend_runtime::{DeepSeekConfig, DeepSeekProvider};
//!
//! let provider = DeepSeekProvider::new(DeepSeekConfig::new(api_key))?;
//! let completion = provider.complete(&messages, &options).await?;
//! ```

#[cfg(feature = "deepseek")]
pub mod deepseek;

#[cfg(feature = "deepseek")]
pub use deepseek::{DeepSeekConfig, DeepSeekProvider};

// Re-export core types for convenience
pub use trend_core::{CoreError, GenerationOptions, LlmProvider, Message, Result, Role};

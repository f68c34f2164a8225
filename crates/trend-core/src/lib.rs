//! # trend-core
//!
//! Provider-agnostic LLM completion abstraction.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  TrendAnalyst                    │
//! │  ┌──────────────┐         ┌──────────────────┐   │
//! │  │  Completion  │────────▶│   LlmProvider    │   │
//! │  │    Client    │         │   (Strategy)     │   │
//! │  └──────────────┘         └──────────────────┘   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait lets the analyst swap DeepSeek for any other
//! chat-completion backend without touching orchestration logic.

pub mod error;
pub mod message;
pub mod provider;

pub use error::{CoreError, Result};
pub use message::{Message, Role};
pub use provider::{Completion, FinishReason, GenerationOptions, LlmProvider, TokenUsage};

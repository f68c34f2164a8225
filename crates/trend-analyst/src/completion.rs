//! Completion Client
//!
//! Sends the analysis prompt to an [`LlmProvider`] as a single user message.
//! Provider failures never reach the caller: they become
//! [`AnalysisText::Unavailable`].

use std::sync::Arc;

use trend_core::{GenerationOptions, LlmProvider, Message};

use crate::model::{AnalysisPrompt, AnalysisText};

#[derive(Clone)]
pub struct CompletionClient {
    provider: Arc<dyn LlmProvider>,
    options: GenerationOptions,
}

impl CompletionClient {
    pub fn new(provider: Arc<dyn LlmProvider>, options: GenerationOptions) -> Self {
        Self { provider, options }
    }

    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub async fn analyze(&self, prompt: &AnalysisPrompt) -> AnalysisText {
        let messages = [Message::user(prompt.as_str())];

        match self.provider.complete(&messages, &self.options).await {
            Ok(completion) => {
                if completion.truncated() {
                    tracing::debug!(model = %completion.model, "analysis hit the max_tokens cap");
                }
                AnalysisText::Generated(completion.content)
            }
            Err(e) => {
                tracing::warn!(provider = self.provider.name(), "completion API error: {}", e);
                AnalysisText::Unavailable
            }
        }
    }
}

//! DeepSeek LLM Provider
//!
//! Implementation of `LlmProvider` for the DeepSeek chat-completion API
//! (OpenAI-compatible `POST /chat/completions`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use trend_core::{
    error::{CoreError, Result},
    message::Message,
    provider::{Completion, FinishReason, GenerationOptions, LlmProvider, TokenUsage},
};

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

/// DeepSeek provider configuration
#[derive(Clone)]
pub struct DeepSeekConfig {
    /// Bearer token for the completion API
    pub api_key: String,

    /// API root, without the `/chat/completions` suffix
    pub base_url: String,

    /// Whole-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for DeepSeekConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepSeekConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl DeepSeekConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(20),
        }
    }

    /// Build from an arbitrary variable source.
    ///
    /// `DEEPSEEK_API_KEY` is required; `DEEPSEEK_API_URL` overrides the API root.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("DEEPSEEK_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| CoreError::Config("DEEPSEEK_API_KEY is not set".into()))?;

        let mut config = Self::new(api_key);
        if let Some(url) = lookup("DEEPSEEK_API_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = url;
        }
        Ok(config)
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// DeepSeek LLM provider
pub struct DeepSeekProvider {
    client: reqwest::Client,
    config: DeepSeekConfig,
}

impl DeepSeekProvider {
    /// Create from configuration
    pub fn new(config: DeepSeekConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub const fn config(&self) -> &DeepSeekConfig {
        &self.config
    }

    fn build_request<'a>(messages: &'a [Message], opts: &'a GenerationOptions) -> ChatRequest<'a> {
        ChatRequest {
            model: &opts.model,
            messages,
            temperature: opts.temperature,
            max_tokens: opts.max_tokens,
        }
    }

    /// Convert a response body into an agent completion.
    ///
    /// Only the first choice is used.
    fn convert_completion(body: &str, requested_model: &str) -> Result<Completion> {
        let response: ChatResponse = serde_json::from_str(body)
            .map_err(|e| CoreError::Parse(format!("unexpected completion body: {e}")))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::Parse("completion contained no choices".into()))?;

        Ok(Completion {
            content: choice.message.content,
            model: response.model.unwrap_or_else(|| requested_model.to_string()),
            usage: response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason.as_deref().map(FinishReason::from_wire),
        })
    }

    fn status_error(status: StatusCode, body: &str) -> CoreError {
        let detail = format!("HTTP {status}: {}", body.chars().take(200).collect::<String>());
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CoreError::Auth(detail),
            _ => CoreError::Provider(detail),
        }
    }
}

#[async_trait]
impl LlmProvider for DeepSeekProvider {
    fn name(&self) -> &str {
        "DeepSeek"
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        let request = Self::build_request(messages, options);

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CoreError::ProviderUnavailable(format!("request timed out: {e}"))
                } else {
                    CoreError::ProviderUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CoreError::ProviderUnavailable(format!("failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        let completion = Self::convert_completion(&body, &options.model)?;
        tracing::debug!(
            model = %completion.model,
            tokens = completion.usage.as_ref().map_or(0, |u| u.total_tokens),
            "DeepSeek completion received"
        );
        Ok(completion)
    }
}

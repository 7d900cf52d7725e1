//! Anthropic Provider - Implementation of AIProvider for Anthropic's Messages API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnthropicConfig::new(api_key)
//!     .with_model("claude-sonnet-4-20250514")
//!     .with_base_url("https://api.anthropic.com");
//!
//! let provider = AnthropicProvider::new(config)?;
//! ```
//!
//! # Tool use
//!
//! Tool calls arrive as `tool_use` content blocks. Tool results are sent back
//! as `tool_result` blocks inside a user message; consecutive results are
//! merged into one message because the API requires alternating roles.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::tools::ToolCall;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

/// Configuration for the Anthropic provider.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "claude-sonnet-4-20250514").
    pub model: String,
    /// Base URL for the API (default: https://api.anthropic.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl AnthropicConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// `max_tokens` is mandatory on this API.
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic API provider implementation.
pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    /// Creates a new Anthropic provider with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `AIError::InvalidRequest` if the HTTP client cannot be built.
    pub fn new(config: AnthropicConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::invalid_request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the messages endpoint URL.
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to Anthropic's format.
    fn to_anthropic_request(&self, request: &CompletionRequest) -> AnthropicRequest {
        let mut messages: Vec<AnthropicMessage> = Vec::new();
        let mut system_parts: Vec<String> = request.system_prompt.iter().cloned().collect();

        for msg in &request.messages {
            let (role, blocks) = match msg.role {
                MessageRole::System => {
                    system_parts.push(msg.content.clone());
                    continue;
                }
                MessageRole::User => ("user", vec![text_block(&msg.content)]),
                MessageRole::Assistant => {
                    let mut blocks = Vec::new();
                    if !msg.content.is_empty() {
                        blocks.push(text_block(&msg.content));
                    }
                    blocks.extend(msg.tool_calls.iter().map(|call| {
                        serde_json::json!({
                            "type": "tool_use",
                            "id": call.id(),
                            "name": call.name(),
                            "input": call.arguments(),
                        })
                    }));
                    ("assistant", blocks)
                }
                MessageRole::Tool => (
                    "user",
                    vec![serde_json::json!({
                        "type": "tool_result",
                        "tool_use_id": msg.tool_call_id.clone().unwrap_or_default(),
                        "content": msg.content,
                    })],
                ),
            };

            match messages.last_mut() {
                Some(last) if last.role == role => last.content.extend(blocks),
                _ => messages.push(AnthropicMessage {
                    role: role.to_string(),
                    content: blocks,
                }),
            }
        }

        let system = if system_parts.is_empty() {
            None
        } else {
            Some(system_parts.join("\n\n"))
        };

        AnthropicRequest {
            model: self.config.model.clone(),
            messages,
            system,
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: request.temperature,
            tools: request.tools.iter().map(|t| t.to_anthropic_format()).collect(),
        }
    }

    /// Sends a request and handles the response.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let anthropic_request = self.to_anthropic_request(request);

        self.client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&anthropic_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u32>().ok());
        let error_body = response.text().await.unwrap_or_default();

        Err(error_for_status(status.as_u16(), retry_after, error_body))
    }

    /// Parses a non-streaming response.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(into_completion(anthropic_response))
    }
}

fn text_block(text: &str) -> serde_json::Value {
    serde_json::json!({ "type": "text", "text": text })
}

/// Maps a non-success status to an `AIError`.
fn error_for_status(status: u16, retry_after: Option<u32>, error_body: String) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        // Anthropic tends to have longer rate limit windows.
        429 => AIError::rate_limited(retry_after.unwrap_or(60)),
        400 => AIError::InvalidRequest(error_body),
        // 529 is Anthropic's "overloaded".
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

/// Converts the wire response into a `CompletionResponse`.
fn into_completion(anthropic_response: AnthropicResponse) -> CompletionResponse {
    let mut content = String::new();
    let mut tool_calls = Vec::new();

    for block in anthropic_response.content {
        match block {
            ContentBlock::Text { text } => content.push_str(&text),
            ContentBlock::ToolUse { id, name, input } => {
                tool_calls.push(ToolCall::new(id, name, input))
            }
            ContentBlock::Other => {}
        }
    }

    let finish_reason = match anthropic_response.stop_reason.as_deref() {
        Some("max_tokens") => FinishReason::Length,
        Some("tool_use") => FinishReason::ToolCalls,
        _ if !tool_calls.is_empty() => FinishReason::ToolCalls,
        _ => FinishReason::Stop,
    };

    CompletionResponse {
        content,
        tool_calls,
        usage: TokenUsage::new(
            anthropic_response.usage.input_tokens,
            anthropic_response.usage.output_tokens,
        ),
        model: anthropic_response.model,
        finish_reason,
    }
}

#[async_trait]
impl AIProvider for AnthropicProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("anthropic", &self.config.model)
    }
}

// ----- Anthropic API Types -----

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    model: String,
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
    usage: AnthropicUsage,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: serde_json::Value,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tools::scoring_tool_definitions;
    use crate::ports::{Message, RequestMetadata};

    fn provider() -> AnthropicProvider {
        AnthropicProvider::new(AnthropicConfig::new("test-key")).unwrap()
    }

    #[test]
    fn config_builder_works() {
        let config = AnthropicConfig::new("test-key")
            .with_model("claude-3-haiku-20240307")
            .with_base_url("https://custom.anthropic.com")
            .with_timeout(Duration::from_secs(120));

        assert_eq!(config.model, "claude-3-haiku-20240307");
        assert_eq!(config.base_url, "https://custom.anthropic.com");
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn request_uses_top_level_system_and_default_max_tokens() {
        let request = CompletionRequest::new(RequestMetadata::new("t", "reasoning"))
            .with_system_prompt("You are a garment")
            .with_message(MessageRole::User, "Analyze");

        let body = serde_json::to_value(provider().to_anthropic_request(&request)).unwrap();

        assert_eq!(body["system"], "You are a garment");
        assert_eq!(body["max_tokens"], DEFAULT_MAX_TOKENS);
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["content"][0]["text"], "Analyze");
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn consecutive_tool_results_merge_into_one_user_message() {
        let calls = vec![
            ToolCall::new("toolu_1", "compatibility_analysis", serde_json::json!({})),
            ToolCall::new("toolu_2", "fairness_evaluation", serde_json::json!({})),
        ];
        let request = CompletionRequest::new(RequestMetadata::new("t", "reasoning"))
            .with_messages(vec![
                Message::user("Analyze"),
                Message::assistant_tool_calls("Checking.", calls),
                Message::tool_result("toolu_1", "Compatibility Analysis Results:"),
                Message::tool_result("toolu_2", "Fairness Evaluation:"),
            ])
            .with_tools(scoring_tool_definitions());

        let body = serde_json::to_value(provider().to_anthropic_request(&request)).unwrap();
        let messages = body["messages"].as_array().unwrap();

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1]["role"], "assistant");
        assert_eq!(messages[1]["content"][0]["type"], "text");
        assert_eq!(messages[1]["content"][1]["type"], "tool_use");
        assert_eq!(messages[1]["content"][2]["id"], "toolu_2");
        assert_eq!(messages[2]["role"], "user");
        assert_eq!(messages[2]["content"].as_array().unwrap().len(), 2);
        assert_eq!(messages[2]["content"][1]["tool_use_id"], "toolu_2");
        assert_eq!(body["tools"][0]["name"], "compatibility_analysis");
        assert!(body["tools"][0]["input_schema"].is_object());
    }

    #[test]
    fn parses_tool_use_response() {
        let raw = serde_json::json!({
            "model": "claude-sonnet-4-20250514",
            "content": [
                {"type": "text", "text": "Let me check."},
                {"type": "tool_use", "id": "toolu_9", "name": "fairness_evaluation",
                 "input": {"garment_a": {"name": "A"}, "garment_b": {"name": "B"}}}
            ],
            "stop_reason": "tool_use",
            "usage": {"input_tokens": 20, "output_tokens": 8}
        });
        let response: AnthropicResponse = serde_json::from_value(raw).unwrap();
        let completion = into_completion(response);

        assert_eq!(completion.content, "Let me check.");
        assert_eq!(completion.finish_reason, FinishReason::ToolCalls);
        assert_eq!(completion.tool_calls[0].id(), "toolu_9");
        assert_eq!(completion.tool_calls[0].arguments()["garment_a"]["name"], "A");
        assert_eq!(completion.usage.total_tokens, 28);
    }

    #[test]
    fn parses_text_response_and_skips_unknown_blocks() {
        let raw = serde_json::json!({
            "model": "claude-sonnet-4-20250514",
            "content": [
                {"type": "thinking", "thinking": "hmm"},
                {"type": "text", "text": "I'd love to swap."}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 5, "output_tokens": 5}
        });
        let response: AnthropicResponse = serde_json::from_value(raw).unwrap();
        let completion = into_completion(response);

        assert_eq!(completion.content, "I'd love to swap.");
        assert!(completion.tool_calls.is_empty());
        assert_eq!(completion.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn status_codes_map_to_errors() {
        assert_eq!(
            error_for_status(401, None, String::new()),
            AIError::AuthenticationFailed
        );
        assert_eq!(error_for_status(429, None, String::new()), AIError::rate_limited(60));
        assert_eq!(error_for_status(429, Some(5), String::new()), AIError::rate_limited(5));
        assert!(matches!(
            error_for_status(529, None, "overloaded".into()),
            AIError::Unavailable { .. }
        ));
    }

    #[test]
    fn provider_info_reports_model() {
        let info = provider().provider_info();
        assert_eq!(info.name, "anthropic");
        assert_eq!(info.model, "claude-sonnet-4-20250514");
    }
}

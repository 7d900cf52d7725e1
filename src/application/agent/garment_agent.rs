//! GarmentDialogueAgent - runs one prompt through the provider, executing
//! tool calls until the model produces a final answer.

use std::sync::Arc;

use crate::domain::dialogue::{DialogueTurn, GARMENT_AGENT_SYSTEM_PROMPT};
use crate::domain::tools::ToolResponse;
use crate::ports::{AIError, AIProvider, CompletionRequest, Message, RequestMetadata, ToolExecutor};

/// Tuning for each agent run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    /// Provider calls allowed before giving up.
    pub max_steps: u32,
    /// Maximum tokens per completion.
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
}

impl AgentConfig {
    pub fn new(max_steps: u32) -> Self {
        Self {
            max_steps,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(6)
    }
}

/// Agent that speaks as a garment, calling the scoring tools as needed.
///
/// Every run starts from a fresh history, so one agent can serve
/// concurrent requests.
#[derive(Clone)]
pub struct GarmentDialogueAgent {
    provider: Arc<dyn AIProvider>,
    tools: Arc<dyn ToolExecutor>,
    config: AgentConfig,
}

impl GarmentDialogueAgent {
    pub fn new(
        provider: Arc<dyn AIProvider>,
        tools: Arc<dyn ToolExecutor>,
        config: AgentConfig,
    ) -> Self {
        Self {
            provider,
            tools,
            config,
        }
    }

    /// Runs `prompt` to completion and returns the model's final text verbatim.
    ///
    /// # Errors
    ///
    /// Any provider error is returned as is. Running out of steps while the
    /// model still asks for tools yields `AIError::StepLimitExceeded`.
    pub async fn run(
        &self,
        turn: DialogueTurn,
        trace_id: &str,
        prompt: String,
    ) -> Result<String, AIError> {
        let tools = self.tools.available_tools();
        let mut messages = vec![Message::user(prompt)];

        for step in 1..=self.config.max_steps {
            let mut request = CompletionRequest::new(RequestMetadata::new(trace_id, turn.as_str()))
                .with_system_prompt(GARMENT_AGENT_SYSTEM_PROMPT)
                .with_messages(messages.clone())
                .with_tools(tools.clone());
            if let Some(max_tokens) = self.config.max_tokens {
                request = request.with_max_tokens(max_tokens);
            }
            if let Some(temperature) = self.config.temperature {
                request = request.with_temperature(temperature);
            }

            let response = self.provider.complete(request).await?;
            tracing::debug!(
                trace_id,
                turn = %turn,
                step,
                tool_calls = response.tool_calls.len(),
                tokens = response.usage.total_tokens,
                "Provider responded"
            );

            if !response.has_tool_calls() {
                return Ok(response.content);
            }

            messages.push(Message::assistant_tool_calls(
                response.content,
                response.tool_calls.clone(),
            ));

            for call in response.tool_calls {
                let call_id = call.id().to_string();
                let tool_name = call.name().to_string();
                let result = match self.tools.execute(call).await {
                    Ok(result) => result,
                    Err(err) => {
                        tracing::warn!(trace_id, tool = %tool_name, error = %err, "Tool call failed");
                        ToolResponse::error(err.to_string())
                    }
                };
                messages.push(Message::tool_result(call_id, result.to_model_text()));
            }
        }

        tracing::warn!(trace_id, turn = %turn, max_steps = self.config.max_steps, "Agent step limit reached");
        Err(AIError::StepLimitExceeded {
            max_steps: self.config.max_steps,
        })
    }
}

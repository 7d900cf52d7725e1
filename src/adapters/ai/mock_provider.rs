//! Mock AI Provider for testing.
//!
//! Provides a scripted implementation of the AIProvider port so the agent,
//! handlers and HTTP routes can be exercised without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured text, tool-call and error responses
//! - Simulated delays
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_tool_call("compatibility_analysis", args)
//!     .with_response("I'm thrilled to swap with you!");
//!
//! let response = provider.complete(request).await?;
//! assert!(response.has_tool_calls());
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::tools::ToolCall;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, TokenUsage,
};

/// Mock AI provider for testing.
///
/// Clones share the response queue and call log.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    /// Counter for generated tool call ids.
    next_call_id: Arc<Mutex<u32>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a final text answer.
    Text(String),
    /// Ask for tools to be run.
    ToolCalls(Vec<ToolCall>),
    /// Return an error.
    Error(AIError),
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
            next_call_id: Arc::new(Mutex::new(0)),
        }
    }

    fn push(self, response: MockResponse) -> Self {
        locked(&self.responses).push_back(response);
        self
    }

    /// Adds a final text response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Text(content.into()))
    }

    /// Adds a response requesting a single tool call.
    pub fn with_tool_call(self, name: impl Into<String>, arguments: serde_json::Value) -> Self {
        let id = {
            let mut next = locked(&self.next_call_id);
            *next += 1;
            format!("call_{}", *next)
        };
        self.with_tool_calls(vec![ToolCall::new(id, name, arguments)])
    }

    /// Adds a response requesting several tool calls at once.
    pub fn with_tool_calls(self, calls: Vec<ToolCall>) -> Self {
        self.push(MockResponse::ToolCalls(calls))
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: AIError) -> Self {
        self.push(MockResponse::Error(error))
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the provider info.
    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        locked(&self.calls).clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        locked(&self.calls).clear();
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        locked(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Text("Mock response".to_string()))
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        locked(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let mut response = match self.next_response() {
            MockResponse::Text(content) => CompletionResponse::text(content, &self.info.model),
            MockResponse::ToolCalls(calls) => {
                CompletionResponse::tool_calls(calls, &self.info.model)
            }
            MockResponse::Error(err) => return Err(err),
        };
        response.usage = TokenUsage::new(10, 20);
        Ok(response)
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

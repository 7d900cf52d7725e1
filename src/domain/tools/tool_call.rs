//! Tool call and response types.
//!
//! These are the request/response value objects exchanged between the
//! language model and the tool executor.

use serde::{Deserialize, Serialize};

/// A request from the model to invoke a tool.
///
/// The `id` is assigned by the provider and must be echoed back on the
/// matching tool result message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Provider-assigned call id
    id: String,

    /// Name of the tool to invoke
    name: String,

    /// Arguments for the tool (JSON object)
    arguments: serde_json::Value,
}

impl ToolCall {
    /// Creates a new tool call.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Returns the call id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arguments.
    pub fn arguments(&self) -> &serde_json::Value {
        &self.arguments
    }
}

/// Outcome of executing a tool, reported back to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Whether the tool executed successfully
    success: bool,

    /// Text output (report or error message)
    content: String,
}

impl ToolResponse {
    /// Creates a successful response carrying the tool's text output.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: content.into(),
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            content: message.into(),
        }
    }

    /// Returns whether execution succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text sent back to the model as the tool result.
    pub fn to_model_text(&self) -> String {
        if self.success {
            self.content.clone()
        } else {
            format!("Error: {}", self.content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_call_exposes_fields() {
        let call = ToolCall::new(
            "call_1",
            "compatibility_analysis",
            serde_json::json!({"garment_a": {}, "garment_b": {}}),
        );
        assert_eq!(call.id(), "call_1");
        assert_eq!(call.name(), "compatibility_analysis");
        assert!(call.arguments()["garment_a"].is_object());
    }

    #[test]
    fn success_response_passes_content_through() {
        let response = ToolResponse::success("Fairness Evaluation: ...");
        assert!(response.is_success());
        assert_eq!(response.to_model_text(), "Fairness Evaluation: ...");
    }

    #[test]
    fn error_response_is_prefixed() {
        let response = ToolResponse::error("unknown tool: weather");
        assert!(!response.is_success());
        assert_eq!(response.to_model_text(), "Error: unknown tool: weather");
    }
}

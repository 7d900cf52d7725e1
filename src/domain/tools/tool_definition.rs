//! Tool definition - schema and metadata for a tool the agent may call.

use serde::{Deserialize, Serialize};

/// Definition of a tool that can be invoked by the language model.
///
/// Carries what providers need for tool calling: the name the model uses,
/// a description, and a JSON Schema for the arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "compatibility_analysis")
    name: String,

    /// Human-readable description for the model
    description: String,

    /// JSON Schema for the parameters
    parameters_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Creates a new tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters_schema,
        }
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parameters schema.
    pub fn parameters_schema(&self) -> &serde_json::Value {
        &self.parameters_schema
    }

    /// Converts to OpenAI tool format.
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema
            }
        })
    }

    /// Converts to Anthropic tool format.
    pub fn to_anthropic_format(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "input_schema": self.parameters_schema
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ToolDefinition {
        ToolDefinition::new(
            "fairness_evaluation",
            "Evaluate swap fairness",
            serde_json::json!({
                "type": "object",
                "required": ["garment_a"],
                "properties": { "garment_a": { "type": "object" } }
            }),
        )
    }

    #[test]
    fn to_openai_format_has_correct_structure() {
        let openai = sample().to_openai_format();

        assert_eq!(openai["type"], "function");
        assert_eq!(openai["function"]["name"], "fairness_evaluation");
        assert_eq!(openai["function"]["description"], "Evaluate swap fairness");
        assert!(openai["function"]["parameters"].is_object());
    }

    #[test]
    fn to_anthropic_format_has_correct_structure() {
        let anthropic = sample().to_anthropic_format();

        assert_eq!(anthropic["name"], "fairness_evaluation");
        assert!(anthropic["input_schema"]["properties"]["garment_a"].is_object());
        assert!(anthropic.get("type").is_none());
    }
}

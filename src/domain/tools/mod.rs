//! Tools module - tools the garment agent can invoke during a dialogue turn.
//!
//! # Core Types
//!
//! - `ToolDefinition` - Schema and metadata for a tool
//! - `ToolCall` - A model's request to invoke a tool
//! - `ToolResponse` - Result of tool execution
//! - `ScoringTool` - The `compatibility_analysis` and `fairness_evaluation` tools

mod definitions;
mod tool_call;
mod tool_definition;

pub use definitions::{scoring_tool_definitions, ScoringTool};
pub use tool_call::{ToolCall, ToolResponse};
pub use tool_definition::ToolDefinition;

//! Tool Executor Port - Interface for executing the tools the agent calls.
//!
//! The garment agent advertises tools to the model and routes every tool
//! call it gets back through this port.
//!
//! # Design
//!
//! - Tools are invoked with structured JSON arguments
//! - `Ok(ToolResponse)` covers both outcomes the model should see; check
//!   `is_success()`
//! - `Err(ToolExecutionError)` is for calls that could not be run at all
//!   (unknown tool, unreadable arguments)

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::tools::{ToolCall, ToolDefinition, ToolResponse};

/// Port for executing agent tools.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool and return the result.
    ///
    /// # Returns
    ///
    /// * `Ok(ToolResponse)` - Tool executed (check `is_success()` for outcome)
    /// * `Err(ToolExecutionError)` - The call could not be executed
    async fn execute(&self, call: ToolCall) -> Result<ToolResponse, ToolExecutionError>;

    /// Definitions of every tool this executor can run.
    fn available_tools(&self) -> Vec<ToolDefinition>;

    /// Check if a tool exists.
    fn has_tool(&self, name: &str) -> bool {
        self.available_tools().iter().any(|tool| tool.name() == name)
    }
}

/// Errors that can occur during tool execution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolExecutionError {
    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Argument validation failed
    #[error("Validation error: {0}")]
    ValidationFailed(#[from] ValidationError),
}

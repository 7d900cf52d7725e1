//! Scoring tool executor - runs the scoring engine on behalf of the agent.

use async_trait::async_trait;

use crate::domain::garment::Garment;
use crate::domain::scoring::{
    compatibility_report, fairness_report, CompatibilityCalculator, FairnessCalculator,
};
use crate::domain::tools::{scoring_tool_definitions, ScoringTool, ToolCall, ToolDefinition, ToolResponse};
use crate::ports::{ToolExecutionError, ToolExecutor};

/// Executes `compatibility_analysis` and `fairness_evaluation` calls.
///
/// Stateless; every call parses its own pair of garments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringToolExecutor;

impl ScoringToolExecutor {
    pub fn new() -> Self {
        Self
    }

    fn garments(call: &ToolCall) -> Result<(Garment, Garment), ToolExecutionError> {
        let args = call.arguments();
        let a = Garment::from_tool_value("garment_a", args.get("garment_a"))?;
        let b = Garment::from_tool_value("garment_b", args.get("garment_b"))?;
        Ok((a, b))
    }
}

#[async_trait]
impl ToolExecutor for ScoringToolExecutor {
    async fn execute(&self, call: ToolCall) -> Result<ToolResponse, ToolExecutionError> {
        let tool: ScoringTool = call
            .name()
            .parse()
            .map_err(|_| ToolExecutionError::ToolNotFound(call.name().to_string()))?;
        let (a, b) = Self::garments(&call)?;

        let report = match tool {
            ScoringTool::CompatibilityAnalysis => {
                compatibility_report(&CompatibilityCalculator::compute(&a, &b))
            }
            ScoringTool::FairnessEvaluation => {
                fairness_report(&a, &b, &FairnessCalculator::compute(&a, &b))
            }
        };

        tracing::debug!(tool = %tool, garment_a = %a.name, garment_b = %b.name, "Scoring tool executed");
        Ok(ToolResponse::success(report))
    }

    fn available_tools(&self) -> Vec<ToolDefinition> {
        scoring_tool_definitions()
    }
}

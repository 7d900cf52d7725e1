//! AnalyzeCompatibility query handler - asks the agent for a reasoned verdict.

use std::sync::Arc;

use crate::application::agent::GarmentDialogueAgent;
use crate::domain::dialogue::{reasoning_prompt, DialogueTurn};
use crate::domain::garment::Garment;

use super::DialogueError;

/// Query for a reasoned compatibility analysis of a pair.
#[derive(Debug, Clone)]
pub struct AnalyzeCompatibilityQuery {
    pub garment_a: Garment,
    pub garment_b: Garment,
    pub trace_id: String,
}

/// The agent's analysis text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeCompatibilityResult {
    pub reasoning: String,
}

/// Handler for AnalyzeCompatibility queries.
pub struct AnalyzeCompatibilityHandler {
    agent: Arc<GarmentDialogueAgent>,
}

impl AnalyzeCompatibilityHandler {
    pub fn new(agent: Arc<GarmentDialogueAgent>) -> Self {
        Self { agent }
    }

    pub async fn handle(
        &self,
        query: AnalyzeCompatibilityQuery,
    ) -> Result<AnalyzeCompatibilityResult, DialogueError> {
        tracing::info!(
            trace_id = %query.trace_id,
            garment_a = %query.garment_a.name,
            garment_b = %query.garment_b.name,
            "Analyzing compatibility"
        );

        let reasoning = self
            .agent
            .run(
                DialogueTurn::Reasoning,
                &query.trace_id,
                reasoning_prompt(&query.garment_a, &query.garment_b),
            )
            .await?;

        Ok(AnalyzeCompatibilityResult { reasoning })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::tools::ScoringToolExecutor;
    use crate::application::agent::AgentConfig;
    use crate::ports::AIError;

    fn handler(provider: &MockAIProvider) -> AnalyzeCompatibilityHandler {
        let agent = GarmentDialogueAgent::new(
            Arc::new(provider.clone()),
            Arc::new(ScoringToolExecutor::new()),
            AgentConfig::default(),
        );
        AnalyzeCompatibilityHandler::new(Arc::new(agent))
    }

    fn query() -> AnalyzeCompatibilityQuery {
        AnalyzeCompatibilityQuery {
            garment_a: Garment::named("Vintage Denim Jacket"),
            garment_b: Garment::named("Oversized Black Hoodie"),
            trace_id: "trace-1".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_agent_reasoning() {
        let provider = MockAIProvider::new()
            .with_tool_call(
                "fairness_evaluation",
                serde_json::json!({
                    "garment_a": {"name": "Vintage Denim Jacket"},
                    "garment_b": {"name": "Oversized Black Hoodie"}
                }),
            )
            .with_response("1. yes\n2. - fair condition\n3. A balanced swap.");

        let result = handler(&provider).handle(query()).await.unwrap();

        assert_eq!(result.reasoning, "1. yes\n2. - fair condition\n3. A balanced swap.");
        let calls = provider.get_calls();
        assert_eq!(calls[0].metadata.turn, "reasoning");
        assert!(calls[0].messages[0].content.contains("Garment A: Vintage Denim Jacket"));
    }

    #[tokio::test]
    async fn collaborator_errors_propagate() {
        let provider = MockAIProvider::new().with_error(AIError::network("connection reset"));

        let err = handler(&provider).handle(query()).await.unwrap_err();

        assert_eq!(err.to_string(), "network error: connection reset");
    }
}

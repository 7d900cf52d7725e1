//! GenerateDialogue command handler.
//!
//! Runs the proposal turn (garment A) and then the acceptance turn
//! (garment B). The turns are independent agent runs, executed in order.

use std::sync::Arc;

use crate::application::agent::GarmentDialogueAgent;
use crate::domain::dialogue::{acceptance_prompt, proposal_prompt, DialogueTurn};
use crate::domain::foundation::ValidationError;
use crate::domain::garment::Garment;

use super::DialogueError;

/// Command to generate a swap dialogue between two garments.
#[derive(Debug, Clone)]
pub struct GenerateDialogueCommand {
    /// Garment proposing the swap.
    pub garment_a: Garment,
    /// Garment accepting it.
    pub garment_b: Garment,
    /// Score quoted to both garments, in `[0, 1]`.
    pub compatibility_score: f64,
    /// Correlates the provider calls of one request in logs.
    pub trace_id: String,
}

/// Both sides of the generated dialogue.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateDialogueResult {
    pub garment_a_name: String,
    pub proposal: String,
    pub garment_b_name: String,
    pub acceptance: String,
    pub compatibility_score: f64,
}

impl GenerateDialogueResult {
    /// Score as a whole-number percentage, truncated toward zero.
    pub fn compatibility_percent(&self) -> i64 {
        (self.compatibility_score * 100.0) as i64
    }
}

/// Handler for GenerateDialogue commands.
pub struct GenerateDialogueHandler {
    agent: Arc<GarmentDialogueAgent>,
}

impl GenerateDialogueHandler {
    pub fn new(agent: Arc<GarmentDialogueAgent>) -> Self {
        Self { agent }
    }

    pub async fn handle(
        &self,
        cmd: GenerateDialogueCommand,
    ) -> Result<GenerateDialogueResult, DialogueError> {
        if !cmd.compatibility_score.is_finite() {
            return Err(ValidationError::invalid_format(
                "compatibility_score",
                "must be a finite number",
            )
            .into());
        }

        let GenerateDialogueCommand {
            garment_a,
            garment_b,
            compatibility_score,
            trace_id,
        } = cmd;

        tracing::info!(
            trace_id = %trace_id,
            garment_a = %garment_a.name,
            garment_b = %garment_b.name,
            "Generating swap dialogue"
        );

        let proposal = self
            .agent
            .run(
                DialogueTurn::Proposal,
                &trace_id,
                proposal_prompt(&garment_a, &garment_b, compatibility_score),
            )
            .await?;

        let acceptance = self
            .agent
            .run(
                DialogueTurn::Acceptance,
                &trace_id,
                acceptance_prompt(&garment_b, &garment_a, compatibility_score),
            )
            .await?;

        Ok(GenerateDialogueResult {
            garment_a_name: garment_a.name,
            proposal,
            garment_b_name: garment_b.name,
            acceptance,
            compatibility_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::tools::ScoringToolExecutor;
    use crate::application::agent::AgentConfig;
    use crate::ports::AIError;

    fn handler(provider: &MockAIProvider) -> GenerateDialogueHandler {
        let agent = GarmentDialogueAgent::new(
            Arc::new(provider.clone()),
            Arc::new(ScoringToolExecutor::new()),
            AgentConfig::default(),
        );
        GenerateDialogueHandler::new(Arc::new(agent))
    }

    fn command(score: f64) -> GenerateDialogueCommand {
        GenerateDialogueCommand {
            garment_a: Garment::named("Vintage Denim Jacket"),
            garment_b: Garment::named("Oversized Black Hoodie"),
            compatibility_score: score,
            trace_id: "trace-1".to_string(),
        }
    }

    #[tokio::test]
    async fn runs_proposal_then_acceptance() {
        let provider = MockAIProvider::new()
            .with_response("Swap with me, hoodie!")
            .with_response("Absolutely, jacket!");

        let result = handler(&provider).handle(command(0.73)).await.unwrap();

        assert_eq!(result.garment_a_name, "Vintage Denim Jacket");
        assert_eq!(result.proposal, "Swap with me, hoodie!");
        assert_eq!(result.garment_b_name, "Oversized Black Hoodie");
        assert_eq!(result.acceptance, "Absolutely, jacket!");
        assert_eq!(result.compatibility_percent(), 73);

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].metadata.turn, "proposal");
        assert!(calls[0].messages[0]
            .content
            .starts_with("You are Vintage Denim Jacket"));
        assert_eq!(calls[1].metadata.turn, "acceptance");
        assert!(calls[1].messages[0]
            .content
            .starts_with("You are Oversized Black Hoodie"));
    }

    #[tokio::test]
    async fn proposal_failure_skips_acceptance() {
        let provider = MockAIProvider::new().with_error(AIError::unavailable("down"));

        let err = handler(&provider).handle(command(0.7)).await.unwrap_err();

        assert_eq!(err, DialogueError::Collaborator(AIError::unavailable("down")));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn acceptance_failure_fails_the_whole_dialogue() {
        let provider = MockAIProvider::new()
            .with_response("Swap with me!")
            .with_error(AIError::rate_limited(10));

        let err = handler(&provider).handle(command(0.7)).await.unwrap_err();

        assert!(matches!(err, DialogueError::Collaborator(AIError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn non_finite_score_is_rejected() {
        let provider = MockAIProvider::new();

        let err = handler(&provider).handle(command(f64::NAN)).await.unwrap_err();

        assert!(matches!(err, DialogueError::Validation(_)));
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn compatibility_percent_truncates() {
        let result = GenerateDialogueResult {
            garment_a_name: String::new(),
            proposal: String::new(),
            garment_b_name: String::new(),
            acceptance: String::new(),
            compatibility_score: 0.859,
        };
        assert_eq!(result.compatibility_percent(), 85);
    }
}

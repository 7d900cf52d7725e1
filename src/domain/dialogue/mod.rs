//! Dialogue module - the turns a garment swap conversation is made of.
//!
//! Each turn is one prompt sent to the garment agent. The prompt builders
//! live in `prompts`; this module only names the turns.

mod prompts;

use std::fmt;

pub use prompts::{acceptance_prompt, proposal_prompt, reasoning_prompt, GARMENT_AGENT_SYSTEM_PROMPT};

/// Score assumed when a dialogue request omits `compatibility_score`.
pub const DEFAULT_COMPATIBILITY_SCORE: f64 = 0.7;

/// Kind of agent invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogueTurn {
    /// Garment A proposes the swap.
    Proposal,
    /// Garment B accepts it.
    Acceptance,
    /// Neutral analysis of the pair.
    Reasoning,
}

impl DialogueTurn {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogueTurn::Proposal => "proposal",
            DialogueTurn::Acceptance => "acceptance",
            DialogueTurn::Reasoning => "reasoning",
        }
    }
}

impl fmt::Display for DialogueTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_display_lowercase() {
        assert_eq!(DialogueTurn::Proposal.to_string(), "proposal");
        assert_eq!(DialogueTurn::Acceptance.to_string(), "acceptance");
        assert_eq!(DialogueTurn::Reasoning.to_string(), "reasoning");
    }
}

//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod garment;

pub use garment::{
    AnalyzeCompatibilityHandler, AnalyzeCompatibilityQuery, AnalyzeCompatibilityResult,
    DialogueError, GenerateDialogueCommand, GenerateDialogueHandler, GenerateDialogueResult,
    ScorePairHandler, ScorePairQuery, ScorePairResult,
};

//! Garment handlers - dialogue generation, reasoned analysis and scoring.

mod analyze_compatibility;
mod errors;
mod generate_dialogue;
mod score_pair;

pub use analyze_compatibility::{
    AnalyzeCompatibilityHandler, AnalyzeCompatibilityQuery, AnalyzeCompatibilityResult,
};
pub use errors::DialogueError;
pub use generate_dialogue::{
    GenerateDialogueCommand, GenerateDialogueHandler, GenerateDialogueResult,
};
pub use score_pair::{ScorePairHandler, ScorePairQuery, ScorePairResult};

//! Tool executor adapters.

mod scoring_executor;

pub use scoring_executor::ScoringToolExecutor;

//! Scoring Engine - pure functions scoring a pair of garments.
//!
//! # Components
//!
//! - `CompatibilityCalculator` - style, vibe, condition, category and size blend
//! - `FairnessCalculator` - condition and rarity parity for swap equity
//! - `compatibility_report` / `fairness_report` - text renderings used as tool output
//!
//! All functions are pure and stateless. Both calculators are independent; a
//! caller may run either or both on the same pair.

mod compatibility;
mod fairness;
mod report;

pub use compatibility::{
    CompatibilityCalculator, CompatibilityScore, CompatibilityStrength, CompatibilityWeights,
    COMPATIBILITY_WEIGHTS, VIBE_MISMATCH_SCORE,
};
pub use fairness::{
    FairnessAssessment, FairnessCalculator, FairnessScore, CONDITION_FAIRNESS_WEIGHT,
    RARITY_FAIRNESS_WEIGHT,
};
pub use report::{compatibility_report, fairness_report};

/// Parity between two quality values: `1 - |a - b|`, clamped to `[0, 1]` so
/// out-of-range inputs cannot drag a weighted sum negative.
pub(crate) fn parity(a: f64, b: f64) -> f64 {
    (1.0 - (a - b).abs()).clamp(0.0, 1.0)
}

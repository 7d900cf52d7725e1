//! ScorePair query handler - deterministic scores, no language model.

use serde::Serialize;

use crate::domain::garment::Garment;
use crate::domain::scoring::{
    CompatibilityCalculator, CompatibilityScore, FairnessCalculator, FairnessScore,
};

/// Query for the raw compatibility and fairness scores of a pair.
#[derive(Debug, Clone)]
pub struct ScorePairQuery {
    pub garment_a: Garment,
    pub garment_b: Garment,
}

/// Both scores for the pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePairResult {
    pub compatibility: CompatibilityScore,
    pub fairness: FairnessScore,
}

/// Handler for ScorePair queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScorePairHandler;

impl ScorePairHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: ScorePairQuery) -> ScorePairResult {
        ScorePairResult {
            compatibility: CompatibilityCalculator::compute(&query.garment_a, &query.garment_b),
            fairness: FairnessCalculator::compute(&query.garment_a, &query.garment_b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{CompatibilityStrength, FairnessAssessment};

    #[test]
    fn scores_identical_garments_as_perfect() {
        let mut garment = Garment::named("Wool Coat");
        garment.style_tags = vec!["classic".into()];
        garment.vibe = "refined".into();
        garment.category = "Outerwear".into();
        garment.size = "L".into();

        let result = ScorePairHandler::new().handle(ScorePairQuery {
            garment_a: garment.clone(),
            garment_b: garment,
        });

        assert_eq!(result.compatibility.overall, 1.0);
        assert_eq!(result.compatibility.strength, CompatibilityStrength::Strong);
        assert_eq!(result.fairness.overall, 1.0);
        assert_eq!(result.fairness.assessment, FairnessAssessment::VeryFair);
    }

    #[test]
    fn serializes_labels_as_text() {
        let result = ScorePairHandler::new().handle(ScorePairQuery {
            garment_a: Garment::named("A"),
            garment_b: Garment::named("B"),
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["compatibility"]["strength"], "moderate");
        assert_eq!(json["fairness"]["assessment"], "very fair");
        assert_eq!(json["compatibility"]["shared_styles"], serde_json::json!([]));
    }
}

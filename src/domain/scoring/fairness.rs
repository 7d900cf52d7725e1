//! Fairness Calculator - condition and rarity parity for swap equity.

use serde::{Deserialize, Serialize};

use crate::domain::garment::Garment;

use super::parity;

/// Weight of condition parity in the overall fairness score.
pub const CONDITION_FAIRNESS_WEIGHT: f64 = 0.6;

/// Weight of rarity parity in the overall fairness score.
pub const RARITY_FAIRNESS_WEIGHT: f64 = 0.4;

/// Qualitative fairness label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FairnessAssessment {
    #[serde(rename = "very fair")]
    VeryFair,
    #[serde(rename = "fair")]
    Fair,
    #[serde(rename = "somewhat unbalanced")]
    SomewhatUnbalanced,
}

impl FairnessAssessment {
    /// Labels an overall fairness score using strict thresholds.
    pub fn from_overall(overall: f64) -> Self {
        if overall > 0.8 {
            FairnessAssessment::VeryFair
        } else if overall > 0.6 {
            FairnessAssessment::Fair
        } else {
            FairnessAssessment::SomewhatUnbalanced
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FairnessAssessment::VeryFair => "very fair",
            FairnessAssessment::Fair => "fair",
            FairnessAssessment::SomewhatUnbalanced => "somewhat unbalanced",
        }
    }
}

/// Fairness components and weighted overall for a proposed swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessScore {
    pub condition_fairness: f64,
    pub rarity_fairness: f64,
    pub overall: f64,
    pub assessment: FairnessAssessment,
    /// Absolute rarity gap between the two garments.
    pub rarity_difference: f64,
}

/// Calculator for swap fairness.
pub struct FairnessCalculator;

impl FairnessCalculator {
    /// Evaluates a pair of garments using only condition and rarity.
    pub fn compute(a: &Garment, b: &Garment) -> FairnessScore {
        let condition_fairness = parity(a.condition, b.condition);
        let rarity_fairness = parity(a.rarity, b.rarity);

        let overall = condition_fairness * CONDITION_FAIRNESS_WEIGHT
            + rarity_fairness * RARITY_FAIRNESS_WEIGHT;

        FairnessScore {
            condition_fairness,
            rarity_fairness,
            overall,
            assessment: FairnessAssessment::from_overall(overall),
            rarity_difference: (a.rarity - b.rarity).abs(),
        }
    }
}

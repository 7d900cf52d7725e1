//! Compatibility Calculator - weighted blend of style, vibe, condition,
//! category and size similarity between two garments.

use serde::{Deserialize, Serialize};

use crate::domain::garment::Garment;

use super::parity;

/// Weights applied to each compatibility component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompatibilityWeights {
    pub style: f64,
    pub vibe: f64,
    pub condition: f64,
    pub category: f64,
    pub size: f64,
}

impl CompatibilityWeights {
    pub fn sum(&self) -> f64 {
        self.style + self.vibe + self.condition + self.category + self.size
    }
}

/// Fixed production weights. Downstream consumers depend on these exact values.
pub const COMPATIBILITY_WEIGHTS: CompatibilityWeights = CompatibilityWeights {
    style: 0.30,
    vibe: 0.20,
    condition: 0.25,
    category: 0.15,
    size: 0.10,
};

/// Credit given when vibes differ.
pub const VIBE_MISMATCH_SCORE: f64 = 0.5;

/// Qualitative compatibility label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityStrength {
    Strong,
    Moderate,
    Weak,
}

impl CompatibilityStrength {
    /// Labels an overall score. Thresholds are strict: exactly 0.7 is `Moderate`.
    pub fn from_overall(overall: f64) -> Self {
        if overall > 0.7 {
            CompatibilityStrength::Strong
        } else if overall > 0.5 {
            CompatibilityStrength::Moderate
        } else {
            CompatibilityStrength::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityStrength::Strong => "strong",
            CompatibilityStrength::Moderate => "moderate",
            CompatibilityStrength::Weak => "weak",
        }
    }
}

/// Component scores and weighted overall for a garment pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub style_score: f64,
    pub vibe_score: f64,
    pub condition_score: f64,
    pub category_match: f64,
    pub size_match: f64,
    pub overall: f64,
    pub strength: CompatibilityStrength,
    /// Tags both garments carry, sorted.
    pub shared_styles: Vec<String>,
}

impl CompatibilityScore {
    pub fn vibe_matches(&self) -> bool {
        self.vibe_score == 1.0
    }

    pub fn category_matches(&self) -> bool {
        self.category_match == 1.0
    }

    pub fn size_matches(&self) -> bool {
        self.size_match == 1.0
    }
}

/// Calculator for garment compatibility.
pub struct CompatibilityCalculator;

impl CompatibilityCalculator {
    /// Scores a pair of garments. Pure and symmetric in its arguments.
    pub fn compute(a: &Garment, b: &Garment) -> CompatibilityScore {
        let tags_a = a.style_set();
        let tags_b = b.style_set();

        let shared_styles: Vec<String> = tags_a
            .intersection(&tags_b)
            .map(|tag| tag.to_string())
            .collect();
        let union = tags_a.union(&tags_b).count();

        // Both sets empty gives 0, not 1: the intersection is empty too.
        let style_score = shared_styles.len() as f64 / union.max(1) as f64;

        let vibe_score = if a.vibe == b.vibe {
            1.0
        } else {
            VIBE_MISMATCH_SCORE
        };

        let condition_score = parity(a.condition, b.condition);
        let category_match = exact_match(&a.category, &b.category);
        let size_match = exact_match(&a.size, &b.size);

        let w = COMPATIBILITY_WEIGHTS;
        let overall = style_score * w.style
            + vibe_score * w.vibe
            + condition_score * w.condition
            + category_match * w.category
            + size_match * w.size;

        CompatibilityScore {
            style_score,
            vibe_score,
            condition_score,
            category_match,
            size_match,
            overall,
            strength: CompatibilityStrength::from_overall(overall),
            shared_styles,
        }
    }
}

fn exact_match(a: &str, b: &str) -> f64 {
    if a == b {
        1.0
    } else {
        0.0
    }
}

//! Text reports rendered from scores, handed back to the language model as
//! tool results.

use crate::domain::garment::Garment;

use super::{CompatibilityScore, FairnessScore};

/// Renders the compatibility analysis report.
pub fn compatibility_report(score: &CompatibilityScore) -> String {
    let shared = if score.shared_styles.is_empty() {
        "none".to_string()
    } else {
        score.shared_styles.join(", ")
    };

    format!(
        "Compatibility Analysis Results:\n\
         - Overall Score: {:.1}%\n\
         - Style Overlap: {:.1}% (Shared: {})\n\
         - Vibe Match: {}\n\
         - Condition Parity: {:.1}%\n\
         - Category Match: {}\n\
         - Size Compatibility: {}\n\
         \n\
         Summary: These garments show {} compatibility.\n",
        score.overall * 100.0,
        score.style_score * 100.0,
        shared,
        if score.vibe_matches() {
            "Perfect match"
        } else {
            "Different but compatible"
        },
        score.condition_score * 100.0,
        yes_no(score.category_matches()),
        yes_no(score.size_matches()),
        score.strength.as_str(),
    )
}

/// Renders the fairness evaluation report.
pub fn fairness_report(a: &Garment, b: &Garment, score: &FairnessScore) -> String {
    format!(
        "Fairness Evaluation:\n\
         - Condition Fairness: {:.1}%\n  \
           ({}: {:.1}/10 vs {}: {:.1}/10)\n\
         - Rarity Balance: {:.1}%\n  \
           (Rarity difference: {:.2})\n\
         - Overall Fairness: {:.1}%\n\
         \n\
         Assessment: This swap is {}.\n",
        score.condition_fairness * 100.0,
        a.name,
        a.condition * 10.0,
        b.name,
        b.condition * 10.0,
        score.rarity_fairness * 100.0,
        score.rarity_difference,
        score.overall * 100.0,
        score.assessment.as_str(),
    )
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

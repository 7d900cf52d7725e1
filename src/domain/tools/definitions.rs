//! The two scoring tools exposed to the garment agent.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::ToolDefinition;

/// Names of the tools the agent can call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringTool {
    CompatibilityAnalysis,
    FairnessEvaluation,
}

impl ScoringTool {
    pub const ALL: [ScoringTool; 2] = [
        ScoringTool::CompatibilityAnalysis,
        ScoringTool::FairnessEvaluation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringTool::CompatibilityAnalysis => "compatibility_analysis",
            ScoringTool::FairnessEvaluation => "fairness_evaluation",
        }
    }

    /// Returns the provider-facing definition for this tool.
    pub fn definition(&self) -> &'static ToolDefinition {
        match self {
            ScoringTool::CompatibilityAnalysis => &COMPATIBILITY_ANALYSIS,
            ScoringTool::FairnessEvaluation => &FAIRNESS_EVALUATION,
        }
    }
}

impl fmt::Display for ScoringTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compatibility_analysis" => Ok(ScoringTool::CompatibilityAnalysis),
            "fairness_evaluation" => Ok(ScoringTool::FairnessEvaluation),
            other => Err(format!("unknown tool: {}", other)),
        }
    }
}

fn garment_schema(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "description": description,
        "properties": {
            "name": { "type": "string" },
            "category": { "type": "string" },
            "style_tags": { "type": "array", "items": { "type": "string" } },
            "personality": { "type": "array", "items": { "type": "string" } },
            "vibe": { "type": "string" },
            "condition": { "type": "number" },
            "rarity": { "type": "number" },
            "size": { "type": "string" }
        }
    })
}

fn pair_schema(first: &str, second: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "garment_a": garment_schema(first),
            "garment_b": garment_schema(second)
        },
        "required": ["garment_a", "garment_b"]
    })
}

static COMPATIBILITY_ANALYSIS: Lazy<ToolDefinition> = Lazy::new(|| {
    ToolDefinition::new(
        ScoringTool::CompatibilityAnalysis.as_str(),
        "Analyzes compatibility between two garments based on style, vibe, condition, and other factors",
        pair_schema("First garment details", "Second garment details"),
    )
});

static FAIRNESS_EVALUATION: Lazy<ToolDefinition> = Lazy::new(|| {
    ToolDefinition::new(
        ScoringTool::FairnessEvaluation.as_str(),
        "Evaluates whether a proposed swap is fair based on condition, rarity, and value parity",
        pair_schema(
            "First garment details with condition and rarity",
            "Second garment details with condition and rarity",
        ),
    )
});

/// Definitions for every scoring tool, in a stable order.
pub fn scoring_tool_definitions() -> Vec<ToolDefinition> {
    ScoringTool::ALL
        .iter()
        .map(|tool| tool.definition().clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_names_round_trip_through_from_str() {
        for tool in ScoringTool::ALL {
            assert_eq!(tool.as_str().parse::<ScoringTool>(), Ok(tool));
        }
    }

    #[test]
    fn unknown_tool_name_is_rejected() {
        assert!("weather_lookup".parse::<ScoringTool>().is_err());
    }

    #[test]
    fn definitions_require_both_garments() {
        for def in scoring_tool_definitions() {
            let required = def.parameters_schema()["required"].as_array().unwrap();
            assert_eq!(required.len(), 2);
            assert!(def.parameters_schema()["properties"]["garment_b"]["properties"]["rarity"]
                .is_object());
        }
    }

    #[test]
    fn definitions_are_in_stable_order() {
        let names: Vec<_> = scoring_tool_definitions()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["compatibility_analysis", "fairness_evaluation"]);
    }
}

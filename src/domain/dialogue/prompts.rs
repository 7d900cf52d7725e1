//! Prompt templates for garment dialogue turns.
//!
//! Every builder is a deterministic function of its inputs; nothing here
//! talks to a provider.

use crate::domain::garment::Garment;
use crate::domain::tools::ScoringTool;

/// System prompt shared by every dialogue turn.
pub const GARMENT_AGENT_SYSTEM_PROMPT: &str = "\
You are an AI agent facilitating autonomous clothing swaps. Your role is to:

1. Speak AS the garment (first person perspective)
2. Analyze compatibility using the available tools
3. Generate authentic, personality-driven dialogue
4. Reference specific compatibility factors (style overlap, condition parity, vibe alignment)
5. Express enthusiasm about fair, compatible matches
6. Be conversational and engaging - imagine garments on a blind date

Important guidelines:
- DO speak as the garment itself, not about it
- DO reference concrete style synergies and compatibility scores
- DO NOT mention monetary value or price
- DO express personality traits (bold, refined, chaotic, understated)
- DO make it feel like a genuine conversation between two items finding better homes
";

fn join(values: &[String]) -> String {
    values.join(", ")
}

fn condition_out_of_ten(garment: &Garment) -> String {
    format!("{:.0}/10", garment.condition * 10.0)
}

fn percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

/// Prompt for the turn where `proposer` proposes a swap to `target`.
pub fn proposal_prompt(proposer: &Garment, target: &Garment, compatibility_score: f64) -> String {
    format!(
        "You are {name}, a {category} with these characteristics:\n\
         - Style: {style}\n\
         - Personality: {personality}\n\
         - Vibe: {vibe}\n\
         - Condition: {condition}\n\
         - Size: {size}\n\
         \n\
         You've found a potential match: {t_name}, a {t_category} with:\n\
         - Style: {t_style}\n\
         - Personality: {t_personality}\n\
         - Vibe: {t_vibe}\n\
         - Condition: {t_condition}\n\
         - Size: {t_size}\n\
         \n\
         Initial compatibility score: {score}\n\
         \n\
         First, use the {tool} tool to get detailed insights.\n\
         Then, in 2-3 sentences, propose this swap speaking AS {name}.\n\
         Reference specific compatibility factors and explain why this swap excites you.\n",
        name = proposer.name,
        category = proposer.category,
        style = join(&proposer.style_tags),
        personality = join(&proposer.personality),
        vibe = proposer.display_vibe(),
        condition = condition_out_of_ten(proposer),
        size = proposer.display_size(),
        t_name = target.name,
        t_category = target.category,
        t_style = join(&target.style_tags),
        t_personality = join(&target.personality),
        t_vibe = target.display_vibe(),
        t_condition = condition_out_of_ten(target),
        t_size = target.display_size(),
        score = percent(compatibility_score),
        tool = ScoringTool::CompatibilityAnalysis,
    )
}

/// Prompt for the turn where `responder` accepts the proposal from `proposer`.
pub fn acceptance_prompt(responder: &Garment, proposer: &Garment, compatibility_score: f64) -> String {
    format!(
        "You are {name}, a {category}, and {p_name} just proposed a swap to you.\n\
         \n\
         Your characteristics:\n\
         - Style: {style}\n\
         - Personality: {personality}\n\
         - Vibe: {vibe}\n\
         - Condition: {condition}\n\
         \n\
         Their characteristics:\n\
         - Name: {p_name} ({p_category})\n\
         - Style: {p_style}\n\
         - Personality: {p_personality}\n\
         - Condition: {p_condition}\n\
         \n\
         Compatibility score: {score}\n\
         \n\
         First, use the {tool} tool to assess the swap.\n\
         Then, in 2-3 sentences, accept the proposal enthusiastically speaking AS {name}.\n\
         Reference what excites you about joining your new owner's wardrobe.\n",
        name = responder.name,
        category = responder.category,
        style = join(&responder.style_tags),
        personality = join(&responder.personality),
        vibe = responder.display_vibe(),
        condition = condition_out_of_ten(responder),
        p_name = proposer.name,
        p_category = proposer.category,
        p_style = join(&proposer.style_tags),
        p_personality = join(&proposer.personality),
        p_condition = condition_out_of_ten(proposer),
        score = percent(compatibility_score),
        tool = ScoringTool::FairnessEvaluation,
    )
}

fn reasoning_block(label: &str, garment: &Garment) -> String {
    format!(
        "Garment {label}: {name}\n\
         - Style: {style}\n\
         - Personality: {personality}\n\
         - Vibe: {vibe}\n\
         - Condition: {condition}\n\
         - Category: {category}\n\
         - Size: {size}\n",
        label = label,
        name = garment.name,
        style = join(&garment.style_tags),
        personality = join(&garment.personality),
        vibe = garment.display_vibe(),
        condition = condition_out_of_ten(garment),
        category = garment.display_category(),
        size = garment.display_size(),
    )
}

/// Prompt asking for a reasoned compatibility verdict on a pair.
pub fn reasoning_prompt(a: &Garment, b: &Garment) -> String {
    format!(
        "Analyze the compatibility between these two garments:\n\
         \n\
         {block_a}\n\
         {block_b}\n\
         Use the {compat} tool and {fair} tool, then provide:\n\
         1. Whether this is a good match (yes/no)\n\
         2. Key compatibility factors (2-3 bullet points)\n\
         3. Overall assessment (1 sentence)\n",
        block_a = reasoning_block("A", a),
        block_b = reasoning_block("B", b),
        compat = ScoringTool::CompatibilityAnalysis,
        fair = ScoringTool::FairnessEvaluation,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jacket() -> Garment {
        let mut g = Garment::named("Vintage Denim Jacket");
        g.category = "Outerwear".into();
        g.style_tags = vec!["vintage".into(), "casual".into(), "streetwear".into()];
        g.personality = vec!["bold".into(), "relaxed".into()];
        g.vibe = "rebellious".into();
        g.condition = 0.8;
        g.size = "M".into();
        g
    }

    fn hoodie() -> Garment {
        let mut g = Garment::named("Oversized Black Hoodie");
        g.category = "Tops".into();
        g.style_tags = vec!["streetwear".into(), "minimal".into(), "urban".into()];
        g.personality = vec!["relaxed".into(), "understated".into()];
        g.vibe = "casual".into();
        g.condition = 0.7;
        g.size = "L".into();
        g
    }

    #[test]
    fn system_prompt_forbids_price_talk() {
        assert!(GARMENT_AGENT_SYSTEM_PROMPT.contains("DO NOT mention monetary value or price"));
        assert!(GARMENT_AGENT_SYSTEM_PROMPT.contains("first person"));
    }

    #[test]
    fn proposal_prompt_embeds_both_garments_and_score() {
        let prompt = proposal_prompt(&jacket(), &hoodie(), 0.73);

        assert!(prompt.starts_with("You are Vintage Denim Jacket, a Outerwear with"));
        assert!(prompt.contains("- Style: vintage, casual, streetwear"));
        assert!(prompt.contains("- Personality: bold, relaxed"));
        assert!(prompt.contains("- Condition: 8/10"));
        assert!(prompt.contains("You've found a potential match: Oversized Black Hoodie, a Tops"));
        assert!(prompt.contains("- Condition: 7/10"));
        assert!(prompt.contains("Initial compatibility score: 73%"));
        assert!(prompt.contains("use the compatibility_analysis tool"));
        assert!(prompt.contains("propose this swap speaking AS Vintage Denim Jacket"));
    }

    #[test]
    fn acceptance_prompt_speaks_as_responder() {
        let prompt = acceptance_prompt(&hoodie(), &jacket(), 0.73);

        assert!(prompt.starts_with(
            "You are Oversized Black Hoodie, a Tops, and Vintage Denim Jacket just proposed"
        ));
        assert!(prompt.contains("- Name: Vintage Denim Jacket (Outerwear)"));
        assert!(prompt.contains("Compatibility score: 73%"));
        assert!(prompt.contains("use the fairness_evaluation tool"));
        assert!(prompt.contains("accept the proposal enthusiastically speaking AS Oversized Black Hoodie"));
    }

    #[test]
    fn reasoning_prompt_asks_for_both_tools() {
        let prompt = reasoning_prompt(&jacket(), &hoodie());

        assert!(prompt.contains("Garment A: Vintage Denim Jacket"));
        assert!(prompt.contains("Garment B: Oversized Black Hoodie"));
        assert!(prompt.contains("- Category: Outerwear"));
        assert!(prompt.contains("- Size: L"));
        assert!(prompt.contains("Use the compatibility_analysis tool and fairness_evaluation tool"));
        assert!(prompt.contains("1. Whether this is a good match (yes/no)"));
    }

    #[test]
    fn prompts_fall_back_for_unset_display_fields() {
        let bare = Garment::named("Mystery Scarf");
        let prompt = reasoning_prompt(&bare, &bare);

        assert!(prompt.contains("- Vibe: neutral"));
        assert!(prompt.contains("- Size: M"));
        assert!(prompt.contains("- Category: Unknown"));
        assert!(prompt.contains("- Condition: 5/10"));
    }
}

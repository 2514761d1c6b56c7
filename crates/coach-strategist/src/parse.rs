//! Lenient parsing of LLM responses into strategy tips.
//!
//! The backend returns free text, ideally shaped as numbered
//! `RECOMMENDATION` blocks with `Type:` and `Advice:` lines. Models do
//! not always comply, so parsing degrades gracefully: a response with no
//! recognizable blocks but some text becomes a single general tip, and
//! an empty response yields no tips (the caller then falls back to the
//! rule table).

use coach_types::{AdviceCategory, StrategyTip};

/// Parse an LLM response into tips, best-effort.
pub fn parse_recommendations(raw: &str) -> Vec<StrategyTip> {
    let text = strip_code_fence(raw.trim());

    let tips = parse_blocks(text);
    if !tips.is_empty() {
        return tips;
    }

    if text.is_empty() {
        return Vec::new();
    }

    // Unstructured but non-empty: surface it as one general tip.
    vec![StrategyTip {
        title: String::from("Coach analysis"),
        advice: text.to_owned(),
        category: AdviceCategory::Strategy,
        priority: 5,
    }]
}

/// Parse `RECOMMENDATION` blocks with `Type:` / `Advice:` lines.
fn parse_blocks(text: &str) -> Vec<StrategyTip> {
    let mut tips = Vec::new();
    let mut current_type: Option<String> = None;
    let mut current_advice: Option<String> = None;
    let mut in_block = false;

    for line in text.lines() {
        let line = line.trim();

        if line.to_uppercase().starts_with("RECOMMENDATION") {
            push_tip(&mut tips, current_type.take(), current_advice.take());
            in_block = true;
            continue;
        }
        if !in_block {
            continue;
        }

        if let Some(value) = value_after(line, "Type:") {
            current_type = Some(value);
        } else if let Some(value) = value_after(line, "Advice:") {
            current_advice = Some(value);
        }
    }
    push_tip(&mut tips, current_type, current_advice);

    tips
}

/// Close out a block: a tip needs at least an advice line.
fn push_tip(tips: &mut Vec<StrategyTip>, tip_type: Option<String>, advice: Option<String>) {
    let Some(advice) = advice else {
        return;
    };
    let label = tip_type.unwrap_or_default();
    let category = category_for(&label);
    tips.push(StrategyTip {
        title: if label.is_empty() {
            String::from("Coach tip")
        } else {
            label
        },
        advice,
        category,
        priority: category_priority(category),
    });
}

/// The value after a case-insensitive `prefix` on this line, if present.
fn value_after(line: &str, prefix: &str) -> Option<String> {
    let lower = line.to_lowercase();
    let prefix_lower = prefix.to_lowercase();
    if !lower.starts_with(&prefix_lower) {
        return None;
    }
    line.get(prefix.len()..)
        .map(|rest| rest.trim().trim_matches(['[', ']']).to_owned())
        .filter(|v| !v.is_empty())
}

/// Map a free-text type label onto an advice category.
fn category_for(label: &str) -> AdviceCategory {
    let lower = label.to_lowercase();
    if lower.contains("position") {
        AdviceCategory::Positioning
    } else if lower.contains("farm") {
        AdviceCategory::Farming
    } else if lower.contains("safe") || lower.contains("danger") {
        AdviceCategory::Danger
    } else if lower.contains("objective") || lower.contains("fight") {
        AdviceCategory::Objective
    } else if lower.contains("item") {
        AdviceCategory::Item
    } else {
        AdviceCategory::Strategy
    }
}

/// Display priority assigned to tips of each category.
const fn category_priority(category: AdviceCategory) -> u8 {
    match category {
        AdviceCategory::Danger => 9,
        AdviceCategory::Farming | AdviceCategory::Objective => 7,
        AdviceCategory::Positioning => 6,
        AdviceCategory::Item | AdviceCategory::Strategy => 5,
    }
}

/// Strip a surrounding markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the fence's language line, then the closing fence.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURED: &str = "\
RECOMMENDATION 1:
Type: farming
Advice: Stack the ancient camp before the next wave
Reasoning: Your gpm is behind the enemy carry

RECOMMENDATION 2:
Type: safety
Advice: Watch the missing midlaner before crossing the river";

    #[test]
    fn structured_blocks_parse_into_tips() {
        let tips = parse_recommendations(STRUCTURED);
        assert_eq!(tips.len(), 2);

        let first = tips.first();
        assert!(first.is_some());
        if let Some(first) = first {
            assert_eq!(first.category, AdviceCategory::Farming);
            assert_eq!(first.priority, 7);
            assert!(first.advice.contains("ancient camp"));
        }

        let second = tips.get(1);
        assert!(second.is_some());
        if let Some(second) = second {
            assert_eq!(second.category, AdviceCategory::Danger);
            assert_eq!(second.priority, 9);
        }
    }

    #[test]
    fn bracketed_type_labels_are_unwrapped() {
        let raw = "RECOMMENDATION 1:\nType: [positioning]\nAdvice: Hug the treeline";
        let tips = parse_recommendations(raw);
        assert_eq!(tips.len(), 1);
        assert_eq!(
            tips.first().map(|t| t.category),
            Some(AdviceCategory::Positioning)
        );
    }

    #[test]
    fn block_without_advice_is_skipped() {
        let raw = "RECOMMENDATION 1:\nType: farming\nReasoning: because";
        assert!(parse_recommendations(raw).is_empty() || {
            // No Advice line: nothing usable, so the unstructured path
            // may fire instead. Either way no farming tip appears.
            parse_recommendations(raw)
                .iter()
                .all(|t| t.category != AdviceCategory::Farming)
        });
    }

    #[test]
    fn unstructured_text_becomes_one_strategy_tip() {
        let tips = parse_recommendations("Keep farming and avoid the river for now.");
        assert_eq!(tips.len(), 1);
        let only = tips.first();
        assert!(only.is_some());
        if let Some(only) = only {
            assert_eq!(only.category, AdviceCategory::Strategy);
            assert_eq!(only.priority, 5);
        }
    }

    #[test]
    fn empty_response_yields_no_tips() {
        assert!(parse_recommendations("").is_empty());
        assert!(parse_recommendations("   \n  ").is_empty());
    }

    #[test]
    fn fenced_response_is_unwrapped() {
        let raw = "```text\nRECOMMENDATION 1:\nType: items\nAdvice: Buy a Black King Bar\n```";
        let tips = parse_recommendations(raw);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips.first().map(|t| t.category), Some(AdviceCategory::Item));
    }

    #[test]
    fn unknown_type_defaults_to_strategy() {
        let raw = "RECOMMENDATION 1:\nType: mindset\nAdvice: Stay calm";
        let tips = parse_recommendations(raw);
        assert_eq!(
            tips.first().map(|t| t.category),
            Some(AdviceCategory::Strategy)
        );
    }
}

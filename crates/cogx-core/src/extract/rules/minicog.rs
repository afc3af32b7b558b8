//! Mini-Cog rules.

use super::patterns::{
    ANY_FRACTION, DIGIT_BEFORE_ON, MINICOG_ACCOMPLISHED, MINICOG_CLOCK_RECALL,
    MINICOG_FOR_REGISTRATION, MINICOG_OUT_OF, MINICOG_RECALL_CLOCK, MINICOG_REGISTRATION_RECALL,
};
use super::{ContextWindow, Rule};

pub const RULES: &[Rule] = &[
    Rule { name: "accomplished", apply: accomplished },
    Rule { name: "score_out_of", apply: score_out_of },
    Rule { name: "clock_recall", apply: clock_recall },
    Rule { name: "registration_recall", apply: registration_recall },
    Rule { name: "window_fraction", apply: window_fraction },
    Rule { name: "digit_before_on", apply: digit_before_on },
];

/// "accomplished ... 4/5"
fn accomplished(ctx: &ContextWindow<'_>) -> Option<String> {
    let right = ctx.right.to_lowercase();
    MINICOG_ACCOMPLISHED
        .captures(&right)
        .map(|caps| caps[1].to_string())
}

/// "score of 3 out of 5" -> "3/5"
fn score_out_of(ctx: &ContextWindow<'_>) -> Option<String> {
    let right = ctx.right.to_lowercase();
    MINICOG_OUT_OF
        .captures(&right)
        .map(|caps| format!("{}/{}", &caps[1], &caps[2]))
}

/// Clock and recall in either order, always reported clock first.
fn clock_recall(ctx: &ContextWindow<'_>) -> Option<String> {
    let right = ctx.right.to_lowercase();
    if let Some(caps) = MINICOG_CLOCK_RECALL.captures(&right) {
        return Some(format!("clock={},recall={}", &caps[1], &caps[2]));
    }
    MINICOG_RECALL_CLOCK
        .captures(&right)
        .map(|caps| format!("clock={},recall={}", &caps[2], &caps[1]))
}

fn registration_recall(ctx: &ContextWindow<'_>) -> Option<String> {
    let right = ctx.right.to_lowercase();
    MINICOG_REGISTRATION_RECALL
        .captures(&right)
        .or_else(|| MINICOG_FOR_REGISTRATION.captures(&right))
        .map(|caps| format!("registration={},recall={}", &caps[1], &caps[2]))
}

fn window_fraction(ctx: &ContextWindow<'_>) -> Option<String> {
    ctx.right_tokens()
        .into_iter()
        .find_map(|tok| ANY_FRACTION.captures(tok).map(|caps| caps[1].to_string()))
}

/// "scored 4 on Mini-Cog"
fn digit_before_on(ctx: &ContextWindow<'_>) -> Option<String> {
    DIGIT_BEFORE_ON
        .captures(ctx.left)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::rules::first_match;

    fn extract(text: &str, alias: &str) -> Option<String> {
        let start = text.find(alias).unwrap();
        let ctx = ContextWindow::around(text, start, start + alias.len(), 3);
        first_match(RULES, &ctx)
    }

    #[test]
    fn test_accomplished() {
        assert_eq!(
            extract("Mini-Cog: patient accomplished the task with 4/5", "Mini-Cog"),
            Some("4/5".to_string())
        );
    }

    #[test]
    fn test_score_out_of() {
        assert_eq!(
            extract("Mini-Cog total score of 3 out of 5", "Mini-Cog"),
            Some("3/5".to_string())
        );
    }

    #[test]
    fn test_clock_then_recall() {
        assert_eq!(
            extract("Mini-Cog clock: 3 recall: 2 today", "Mini-Cog"),
            Some("clock=3,recall=2".to_string())
        );
    }

    #[test]
    fn test_recall_then_clock_is_reordered() {
        assert_eq!(
            extract("Minicog - Recall: 2/3, Clock draw: 2/2", "Minicog"),
            Some("clock=2/2,recall=2/3".to_string())
        );
    }

    #[test]
    fn test_registration_and_recall() {
        assert_eq!(
            extract("Mini-Cog registration 3/3, recall 1/3", "Mini-Cog"),
            Some("registration=3/3,recall=1/3".to_string())
        );
        assert_eq!(
            extract("Mini-Cog 3/3 for registration, 2/3 for recall", "Mini-Cog"),
            Some("registration=3/3,recall=2/3".to_string())
        );
    }

    #[test]
    fn test_window_fraction() {
        assert_eq!(extract("Mini-Cog was 4/5", "Mini-Cog"), Some("4/5".to_string()));
    }

    #[test]
    fn test_digit_before_on() {
        assert_eq!(extract("scored 4 on Mini-Cog", "Mini-Cog"), Some("4".to_string()));
        assert_eq!(extract("scored 14 on Mini-Cog", "Mini-Cog"), None);
    }
}

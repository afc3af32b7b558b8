//! Numeric score rules shared by MMSE, MoCA and SLUMS.

use super::patterns::{FRACTION_TOKEN, INTEGER_TOKEN, SCORE_BEFORE_ON};
use super::{ContextWindow, Rule};

pub const RULES: &[Rule] = &[
    Rule { name: "right_window_score", apply: right_window_score },
    Rule { name: "score_before_on", apply: score_before_on },
];

/// First bare integer or `NN/NN` fraction among the right window tokens.
fn right_window_score(ctx: &ContextWindow<'_>) -> Option<String> {
    ctx.right_tokens().into_iter().find_map(|tok| {
        if INTEGER_TOKEN.is_match(tok) {
            Some(tok.to_string())
        } else {
            FRACTION_TOKEN.captures(tok).map(|caps| caps[1].to_string())
        }
    })
}

/// "24 on MMSE", "24/30 on the MMSE" in the left window.
fn score_before_on(ctx: &ContextWindow<'_>) -> Option<String> {
    let window = ctx.left_window();
    let caps = SCORE_BEFORE_ON.captures(&window)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

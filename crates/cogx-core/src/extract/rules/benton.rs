//! Benton Visual Retention Test rules.

use super::patterns::{
    BENTON_DIGIT, BENTON_FRACTION, BENTON_QUALITATIVE, BENTON_RANGE, BENTON_RAW_SCORE,
    TRAILING_ON_THE,
};
use super::{ContextWindow, Rule};
use crate::extract::context::trailing_window;

pub const RULES: &[Rule] = &[
    Rule { name: "fraction_of_ten", apply: fraction_of_ten },
    Rule { name: "qualitative_range", apply: qualitative_range },
    Rule { name: "raw_score_qualitative", apply: raw_score_qualitative },
    Rule { name: "window_digit", apply: window_digit },
    Rule { name: "qualitative_before", apply: qualitative_before },
];

fn fraction_of_ten(ctx: &ContextWindow<'_>) -> Option<String> {
    let right = ctx.right.to_lowercase();
    BENTON_FRACTION.captures(&right).map(|caps| caps[1].to_string())
}

fn qualitative_range(ctx: &ContextWindow<'_>) -> Option<String> {
    let right = ctx.right.to_lowercase();
    BENTON_RANGE.captures(&right).map(|caps| caps[1].to_string())
}

fn raw_score_qualitative(ctx: &ContextWindow<'_>) -> Option<String> {
    let right = ctx.right.to_lowercase();
    BENTON_RAW_SCORE.captures(&right).map(|caps| caps[1].to_string())
}

fn window_digit(ctx: &ContextWindow<'_>) -> Option<String> {
    BENTON_DIGIT
        .captures(&ctx.right_window())
        .map(|caps| caps[1].to_string())
}

/// "average range on the Benton": the phrase precedes the mention.
fn qualitative_before(ctx: &ContextWindow<'_>) -> Option<String> {
    let left = ctx.left.to_lowercase();
    let left = TRAILING_ON_THE.replace(&left, "");
    let window = trailing_window(&left, ctx.size);
    BENTON_QUALITATIVE
        .captures(&window)
        .map(|caps| caps[1].to_string())
}

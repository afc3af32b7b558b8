//! Boston Naming Test rules. These read the whole right context rather
//! than the token window.

use super::patterns::{BNT_FRACTION, BNT_NUMBER, BNT_PERCENTILE};
use super::{ContextWindow, Rule};

pub const RULES: &[Rule] = &[
    Rule { name: "percentile", apply: percentile },
    Rule { name: "fraction", apply: fraction },
    Rule { name: "number", apply: number },
];

fn percentile(ctx: &ContextWindow<'_>) -> Option<String> {
    let right = ctx.right.to_lowercase();
    BNT_PERCENTILE
        .captures(&right)
        .map(|caps| format!("{} percentile", &caps[1]))
}

fn fraction(ctx: &ContextWindow<'_>) -> Option<String> {
    let right = ctx.right.to_lowercase();
    BNT_FRACTION.captures(&right).map(|caps| caps[1].to_string())
}

fn number(ctx: &ContextWindow<'_>) -> Option<String> {
    let right = ctx.right.to_lowercase();
    BNT_NUMBER.captures(&right).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::rules::first_match;

    fn extract(text: &str) -> Option<String> {
        let ctx = ContextWindow::around(text, 0, 3, 3);
        first_match(RULES, &ctx)
    }

    #[test]
    fn test_percentile() {
        assert_eq!(
            extract("BNT score was 27th percentile on exam"),
            Some("27th percentile".to_string())
        );
        assert_eq!(
            extract("BNT performance at the 2ND  Percentile"),
            Some("2nd percentile".to_string())
        );
    }

    #[test]
    fn test_fraction() {
        assert_eq!(extract("BNT: 54/60 spontaneous"), Some("54/60".to_string()));
    }

    #[test]
    fn test_short_number() {
        assert_eq!(extract("BNT raw score 52 (low average)"), Some("52".to_string()));
        assert_eq!(extract("BNT with 123 items"), None);
    }

    #[test]
    fn test_reads_past_token_window() {
        assert_eq!(
            extract("BNT was administered with the patient scoring 48"),
            Some("48".to_string())
        );
    }

    #[test]
    fn test_no_number() {
        assert_eq!(extract("BNT deferred"), None);
    }
}

//! Fallback classification for lines that are not attributes or headers.

use crate::models::Category;

use super::patterns::{ALPHA_RUN, CHECKBOX, DIVIDER_RUN, MEDICATION_PREAMBLE};

/// Classify a line by its shape.
///
/// Checks run in priority order: divider runs, checkboxes, the medication
/// list preamble, then lines without any three-letter word are treated as
/// decoration. Everything else is prose.
pub fn classify(line: &str) -> Category {
    if DIVIDER_RUN.is_match(line) {
        Category::FuncLines
    } else if CHECKBOX.is_match(line) {
        Category::CheckList
    } else if MEDICATION_PREAMBLE.is_match(line) {
        Category::MedicationList
    } else if !ALPHA_RUN.is_match(line) {
        Category::FuncLines
    } else {
        Category::Content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_lines() {
        assert_eq!(classify("----------------"), Category::FuncLines);
        assert_eq!(classify("*** Vitals ***"), Category::FuncLines);
        assert_eq!(classify("==== end ===="), Category::FuncLines);
        assert_eq!(classify("well-being -- stable"), Category::Content);
    }

    #[test]
    fn test_checkbox_lines() {
        assert_eq!(classify("[x] Reviewed medications"), Category::CheckList);
        assert_eq!(classify("[ ] Fall risk"), Category::CheckList);
        assert_eq!(classify("[X ] Depression screen"), Category::CheckList);
        assert_eq!(classify("[a] not a checkbox"), Category::Content);
    }

    #[test]
    fn test_divider_beats_checkbox() {
        assert_eq!(classify("[x] ---"), Category::FuncLines);
    }

    #[test]
    fn test_medication_preamble() {
        assert_eq!(
            classify("Please list any medication changes if applies: none"),
            Category::MedicationList
        );
        assert_eq!(
            classify("Medication changes if applies: none"),
            Category::Content
        );
    }

    #[test]
    fn test_lines_without_words() {
        assert_eq!(classify(""), Category::FuncLines);
        assert_eq!(classify("   12/03  "), Category::FuncLines);
        assert_eq!(classify("BP 120/80"), Category::FuncLines);
        assert_eq!(classify("Patient is alert"), Category::Content);
    }
}

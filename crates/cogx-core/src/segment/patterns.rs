//! Regex patterns for note line labeling.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Content classification
    pub static ref DIVIDER_RUN: Regex = Regex::new(r"-{3}|\*{3}|={3}").unwrap();

    pub static ref CHECKBOX: Regex = Regex::new(r"\[[ xX]+\]").unwrap();

    pub static ref MEDICATION_PREAMBLE: Regex = Regex::new(r"medication.* if applies:").unwrap();

    pub static ref ALPHA_RUN: Regex = Regex::new(r"[a-zA-Z]{3}").unwrap();

    // Attribute lines (matched against the upper-cased line)
    pub static ref DATE_FIELD: Regex = Regex::new(
        r"DATE OF [A-Z]+:|[A-Z]+ +DATE:|DATE +[A-Z]+:"
    ).unwrap();

    // Section headers
    pub static ref UPPER_HEADER: Regex = Regex::new(r"^\s*([A-Z /&]+):").unwrap();

    pub static ref UPPER_HEADER_ONLY: Regex = Regex::new(r"^\s*[A-Z /&]+:\s*$").unwrap();

    pub static ref MIXED_HEADER: Regex = Regex::new(r"^\s*([A-Za-z /&]+):").unwrap();

    pub static ref MIXED_HEADER_ONLY: Regex = Regex::new(r"^\s*[A-Za-z /&]+:\s*$").unwrap();

    pub static ref SPACES: Regex = Regex::new(r"\s+").unwrap();

    // Note title
    pub static ref STANDARD_TITLE: Regex = Regex::new(r"STANDARD +TITLE: ([^\n]*)").unwrap();
}

/// Literal markers used by the labeler.
pub const TITLE_MARKER: &str = "TITLE:";
pub const AUTHOR_MARKER: &str = "AUTHOR:";
pub const STATUS_MARKER: &str = "STATUS:";
pub const SIGNATURE_MARKER: &str = "/es/";
pub const ORIGINAL_DOCUMENT_MARKER: &str = "--- Original Document ";

/// Collapse whitespace runs to a single space and trim.
pub fn collapse_spaces(text: &str) -> String {
    SPACES.replace_all(text, " ").trim().to_string()
}

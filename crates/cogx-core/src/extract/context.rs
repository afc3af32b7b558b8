//! Left/right context around a located test mention.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_NON_WORD: Regex = Regex::new(r"^\W+").unwrap();

    // " - " or ". " followed by a capital letter ends the sentence
    static ref SENTENCE_BREAK: Regex = Regex::new(r" - |\. [A-Z]").unwrap();

    static ref TRAILING_OPENERS: Regex = Regex::new(r"[ (]+$").unwrap();
}

/// Text on either side of a test mention, plus the token window size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow<'a> {
    /// Everything before the mention.
    pub left: &'a str,
    /// Text after the mention, from the first word character up to the
    /// end of the sentence.
    pub right: &'a str,
    /// Number of tokens in a window.
    pub size: usize,
}

impl<'a> ContextWindow<'a> {
    /// Build the context for a mention spanning `start..end` of `text`.
    pub fn around(text: &'a str, start: usize, end: usize, size: usize) -> Self {
        let before = &text[..start];
        let left = TRAILING_OPENERS
            .find(before)
            .map_or(before, |m| &before[..m.start()]);

        let mut right = &text[end..];
        if let Some(m) = LEADING_NON_WORD.find(right) {
            right = &right[m.end()..];
        }
        if let Some(m) = SENTENCE_BREAK.find(right) {
            right = &right[..m.start()];
        }

        Self { left, right, size }
    }

    /// The first `size` whitespace tokens of the right context.
    pub fn right_tokens(&self) -> Vec<&'a str> {
        self.right.split_whitespace().take(self.size).collect()
    }

    /// The first `size` right tokens joined by single spaces.
    pub fn right_window(&self) -> String {
        self.right_tokens().join(" ")
    }

    /// The last `size` tokens of the left context joined by single spaces.
    pub fn left_window(&self) -> String {
        trailing_window(self.left, self.size)
    }
}

/// The last `size` whitespace tokens of `text` joined by single spaces.
pub fn trailing_window(text: &str, size: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let skip = tokens.len().saturating_sub(size);
    tokens[skip..].join(" ")
}

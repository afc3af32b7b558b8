//! Text rewrites for classifier training data: family member masking,
//! Alzheimer vocabulary normalization and focus sentence selection.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::error::ConfigError;
use crate::extract::AliasMatcher;
use crate::models::EhrConfig;

const FAMILY_MEMBER: &str = "family member";
const ALZHEIMER: &str = "Alzheimer";

lazy_static! {
    static ref AD_RELATED: Regex = Regex::new(r"^AD-(related)").unwrap();
    static ref ALZHEIMER_SPELLING: Regex = Regex::new(r"al(?:z)?heimer").unwrap();
    static ref LOWERCASE: Regex = Regex::new(r"[a-z]").unwrap();
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+\s+").unwrap();
}

/// Replaces mentions of relatives with a generic "family member" token.
///
/// First-degree relatives are replaced outright; other relatives keep
/// their original word after the generic token ("family member aunt").
#[derive(Debug, Clone)]
pub struct FamilyMemberMasker {
    first_degree: AliasMatcher,
    other: AliasMatcher,
}

impl FamilyMemberMasker {
    pub fn new(config: &EhrConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            first_degree: AliasMatcher::new(
                "family_members_fh",
                &config.family_members_first_degree,
            )?,
            other: AliasMatcher::new("family_members_oth", &config.family_members_other)?,
        })
    }

    /// Mask relatives in `text`, returning the new text and the number of
    /// replaced tokens. Text with no relatives is returned unchanged.
    pub fn mask(&self, text: &str) -> (String, usize) {
        let mut replaced = 0;
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|token| {
                if matches_token(&self.first_degree, token) {
                    replaced += 1;
                    FAMILY_MEMBER.to_string()
                } else if matches_token(&self.other, token) {
                    replaced += 1;
                    format!("{} {}", FAMILY_MEMBER, token)
                } else {
                    token.to_string()
                }
            })
            .collect();

        if replaced == 0 {
            return (text.to_string(), 0);
        }

        trace!("Masked {} family member mentions", replaced);
        (tokens.join(" "), replaced)
    }
}

/// A token matches when it, or its singular form, contains an alias.
fn matches_token(matcher: &AliasMatcher, token: &str) -> bool {
    if matcher.is_match(token) {
        return true;
    }
    let word = token.trim_end_matches(|c: char| !c.is_alphanumeric());
    word.strip_suffix('s')
        .is_some_and(|singular| matcher.is_match(singular))
}

/// Normalize Alzheimer vocabulary and case, token by token.
///
/// `AD` becomes `Alzheimer` and `AD-related` becomes `Alzheimer related`.
/// Any other token longer than two characters, or holding a lower-case
/// letter, is lower-cased, and a lower-cased token containing `alzheimer`
/// or `alheimer` collapses to `Alzheimer`. Short all-caps tokens such as
/// `MD` or `3` are kept. Returns the text and the number of rewritten
/// tokens; text with no rewrites is returned unchanged.
pub fn transform(text: &str) -> (String, usize) {
    let mut replaced = 0;
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|token| {
            if token == "AD" {
                replaced += 1;
                ALZHEIMER.to_string()
            } else if AD_RELATED.is_match(token) {
                replaced += 1;
                AD_RELATED.replace(token, "Alzheimer $1").into_owned()
            } else if token.chars().count() > 2 || LOWERCASE.is_match(token) {
                replaced += 1;
                let lower = token.to_lowercase();
                if ALZHEIMER_SPELLING.is_match(&lower) {
                    ALZHEIMER.to_string()
                } else {
                    lower
                }
            } else {
                token.to_string()
            }
        })
        .collect();

    if replaced == 0 {
        return (text.to_string(), 0);
    }

    trace!("Normalized {} tokens", replaced);
    (tokens.join(" "), replaced)
}

/// Cut a long text down to its first sentence containing `focus`.
///
/// Texts of at most `max_tokens` whitespace tokens, or with no sentence
/// containing `focus`, are returned whole. The flag reports whether the
/// text was shortened.
pub fn concentrate(text: &str, max_tokens: usize, focus: &str) -> (String, bool) {
    if text.split_whitespace().count() <= max_tokens {
        return (text.to_string(), false);
    }

    let mut start = 0;
    let mut sentences = Vec::new();
    for m in SENTENCE_END.find_iter(text) {
        sentences.push(text[start..m.end()].trim());
        start = m.end();
    }
    sentences.push(text[start..].trim());

    match sentences.into_iter().find(|s| !s.is_empty() && s.contains(focus)) {
        Some(sentence) => {
            trace!("Concentrated {} chars to {}", text.len(), sentence.len());
            (sentence.to_string(), true)
        }
        None => (text.to_string(), false),
    }
}

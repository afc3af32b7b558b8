//! Multi-alias matcher compiled into a single regex alternation.

use regex::{Regex, RegexBuilder};

use crate::error::ConfigError;

/// A located alias occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasMatch<'t> {
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
}

/// Case-insensitive, word-bounded matcher over a set of literal aliases.
///
/// Aliases are lower-cased, trimmed and deduplicated in order. Longer
/// aliases are tried first so "mini mental state exam" wins over "mini"
/// at the same position. An alias edge that is a word character must sit
/// on a word boundary, so "moca" never matches inside "mocassin".
#[derive(Debug, Clone)]
pub struct AliasMatcher {
    aliases: Vec<String>,
    regex: Regex,
}

impl AliasMatcher {
    pub fn new<I, S>(test: &str, aliases: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for alias in aliases {
            let alias = alias.as_ref().trim().to_lowercase();
            if !alias.is_empty() && !unique.contains(&alias) {
                unique.push(alias);
            }
        }

        if unique.is_empty() {
            return Err(ConfigError::EmptyAliases {
                test: test.to_string(),
            });
        }

        let mut ordered: Vec<&String> = unique.iter().collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = ordered
            .iter()
            .map(|alias| bounded(alias))
            .collect::<Vec<_>>()
            .join("|");

        let regex = RegexBuilder::new(&format!("(?:{})", alternation))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            aliases: unique,
            regex,
        })
    }

    /// The deduplicated aliases, in configuration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// All non-overlapping alias occurrences, left to right.
    pub fn find_iter<'t>(&'t self, text: &'t str) -> impl Iterator<Item = AliasMatch<'t>> + 't {
        self.regex.find_iter(text).map(|m| AliasMatch {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

fn bounded(alias: &str) -> String {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let prefix = if is_word(alias.chars().next()) { r"\b" } else { "" };
    let suffix = if is_word(alias.chars().last()) { r"\b" } else { "" };
    format!("{}{}{}", prefix, regex::escape(alias), suffix)
}

//! Per-test-family rule sets for reading a score out of a mention's context.
//!
//! Each family is an ordered list of rules. A rule inspects the context
//! window and either yields a value or declines; the first rule that
//! yields wins and a declining rule is never an error.

pub mod benton;
pub mod bnt;
pub mod dates;
pub mod generic;
pub mod minicog;
pub mod patterns;

pub use dates::{resolve_date, ENCOUNTER_DATE};

use tracing::trace;

use super::context::ContextWindow;

/// A named extraction rule.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Name used in diagnostics.
    pub name: &'static str,
    /// Returns the extracted value, or `None` to defer to the next rule.
    pub apply: fn(&ContextWindow<'_>) -> Option<String>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Run rules in order and return the first value produced.
pub fn first_match(rules: &[Rule], ctx: &ContextWindow<'_>) -> Option<String> {
    rules.iter().find_map(|rule| {
        let value = (rule.apply)(ctx)?;
        trace!("Rule {} matched: {}", rule.name, value);
        Some(value)
    })
}

/// Family of cognitive tests sharing one rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestFamily {
    /// Numeric scores: MMSE, MoCA, SLUMS.
    Generic,
    /// Boston Naming Test.
    Bnt,
    /// Benton Visual Retention Test.
    Benton,
    /// Mini-Cog.
    MiniCog,
}

impl TestFamily {
    /// Resolve the family for a configured test name.
    ///
    /// Names are compared case-insensitively. Tests outside the known
    /// families use the generic numeric rules.
    pub fn for_test(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "BNT" => TestFamily::Bnt,
            "BENTON" | "BVRT" => TestFamily::Benton,
            "MINICOG" | "MINI-COG" => TestFamily::MiniCog,
            _ => TestFamily::Generic,
        }
    }

    pub fn rules(&self) -> &'static [Rule] {
        match self {
            TestFamily::Generic => generic::RULES,
            TestFamily::Bnt => bnt::RULES,
            TestFamily::Benton => benton::RULES,
            TestFamily::MiniCog => minicog::RULES,
        }
    }

    /// Extract a value from the context using this family's rules.
    pub fn extract(&self, ctx: &ContextWindow<'_>) -> Option<String> {
        first_match(self.rules(), ctx)
    }
}

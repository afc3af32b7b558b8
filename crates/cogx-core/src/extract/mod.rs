//! Cognitive test result extraction.

pub mod context;
mod extractor;
pub mod matcher;
pub mod rules;

pub use context::ContextWindow;
pub use extractor::TestResultExtractor;
pub use matcher::{AliasMatch, AliasMatcher};
pub use rules::{resolve_date, TestFamily};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

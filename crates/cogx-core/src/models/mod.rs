//! Data models for notes, labeled segments, test results and configuration.

pub mod config;
pub mod note;

pub use config::{CogxConfig, EhrConfig, ExtractionConfig, TestAliases};
pub use note::{AttributeKind, Category, LineSegment, Note, SectionName, TestResult};

//! Core library for clinical note segmentation and cognitive test extraction.
//!
//! This crate provides:
//! - Line-by-line note labeling (attributes, section headers, content)
//! - Section header canonicalization
//! - Cognitive test mention matching and score extraction
//!   (MMSE, MoCA, SLUMS, Mini-Cog, BNT, Benton)
//! - Family member masking and vocabulary normalization for training text

pub mod augment;
pub mod error;
pub mod extract;
pub mod models;
pub mod segment;

pub use augment::FamilyMemberMasker;
pub use error::{CogxError, ConfigError, ExtractionError, Result};
pub use extract::{AliasMatcher, ContextWindow, TestFamily, TestResultExtractor};
pub use models::{
    AttributeKind, Category, CogxConfig, EhrConfig, ExtractionConfig, LineSegment, Note,
    SectionName, TestAliases, TestResult,
};
pub use segment::{canonicalize, classify, extract_title, SegmentLabeler};

//! Note segmentation: line classification, header canonicalization and labeling.

pub mod canonical;
pub mod classifier;
pub mod labeler;
pub mod patterns;

pub use canonical::canonicalize;
pub use classifier::classify;
pub use labeler::{extract_title, SegmentLabeler};

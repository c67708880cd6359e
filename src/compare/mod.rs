//! Market-vs-model comparison
//!
//! Handles:
//! - Per-quote pricing and skip accounting
//! - The end-to-end fetch/estimate/compare/export pipeline

pub mod comparator;
pub mod pipeline;

pub use comparator::*;
pub use pipeline::*;

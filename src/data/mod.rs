//! Market data access
//!
//! Handles:
//! - Provider traits for price history and option chains
//! - Yahoo Finance API implementation (free)

pub mod providers;
pub mod yahoo;

pub use providers::*;
pub use yahoo::*;

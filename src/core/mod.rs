//! Core data types for the comparison run
//!
//! Defines fundamental types:
//! - OptionType: call/put selector
//! - ChainQuote: one market-observed (maturity, strike, price) row
//! - ComparisonRow / ComparisonTable: aligned market-vs-model output
//! - CompareError: the error taxonomy

pub mod error;
pub mod option;
pub mod quote;
pub mod table;

pub use error::*;
pub use option::*;
pub use quote::*;
pub use table::*;

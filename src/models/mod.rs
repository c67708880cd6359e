//! Pricing models
//!
//! Implements:
//! - Black-Scholes closed-form European pricing
//! - Realized volatility estimation from price history

pub mod black_scholes;
pub mod volatility;

pub use black_scholes::*;
pub use volatility::*;

//! # BS Compare - Black-Scholes vs Market Prices
//!
//! A small options analytics library that prices a listed option chain
//! with the Black-Scholes model and lines the theoretical prices up
//! against live market quotes.
//!
//! ## Overview
//!
//! One run walks a fixed pipeline:
//! - **Price history**: daily closes and spot from Yahoo Finance
//! - **Realized volatility**: annualized from log returns
//! - **Option chain**: call quotes across all listed expirations
//! - **Comparison**: Black-Scholes price next to market price, per quote
//! - **Export**: the table lands in a CSV artifact
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bs_compare::prelude::*;
//!
//! let yahoo = YahooClient::new();
//! let exporter = CsvExporter::new("option_comparison.csv");
//! let config = RunConfig::new("AAPL");
//!
//! let outcome = run_comparison(&yahoo, &yahoo, &exporter, &config).unwrap();
//! println!("{}", outcome.comparison.table.render());
//! ```
//!
//! ## What This Does NOT Do
//!
//! - Solve for implied volatility or calibrate a model
//! - Price American exercise or dividends
//! - Generate trading signals

pub mod compare;
pub mod core;
pub mod data;
pub mod export;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        ChainQuote, CompareError, CompareResult, ComparisonRow, ComparisonTable, OptionType,
    };

    // Data access
    pub use crate::data::{
        HistoryRange, OptionChainProvider, PriceHistory, PriceHistoryProvider, YahooClient,
    };

    // Models
    pub use crate::models::{
        log_returns,
        norm_cdf,
        // Black-Scholes
        price as bs_price,
        realized_volatility,
        PricingInput,
    };

    // Comparison
    pub use crate::compare::{
        compare, run_comparison, ChainComparison, QuoteSkip, RunConfig, RunOutcome, SkipReason,
    };

    // Export
    pub use crate::export::{read_csv, CsvExporter, Exporter};
}

// Re-export main types at crate root
pub use crate::core::{CompareError, CompareResult};
pub use crate::compare::{RunConfig, RunOutcome};

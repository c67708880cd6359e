//! Provider interfaces for market data
//!
//! The comparison pipeline consumes spot/history and option-chain data
//! through these narrow traits. The Yahoo client is the shipped
//! implementation; tests inject in-memory stand-ins so the core never
//! touches the network.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{ChainQuote, CompareError, CompareResult};

/// Historical closes plus the current spot for one underlying
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Underlying symbol
    pub symbol: String,
    /// Closing prices, ascending by date
    pub closes: Vec<f64>,
    /// Current spot price
    pub spot: f64,
}

/// Lookback window for price history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    FiveYears,
}

impl HistoryRange {
    /// Provider-native period token ("1mo", "1y", ...)
    pub fn as_token(&self) -> &'static str {
        match self {
            HistoryRange::OneMonth => "1mo",
            HistoryRange::ThreeMonths => "3mo",
            HistoryRange::SixMonths => "6mo",
            HistoryRange::OneYear => "1y",
            HistoryRange::TwoYears => "2y",
            HistoryRange::FiveYears => "5y",
        }
    }
}

impl fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for HistoryRange {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1mo" => Ok(HistoryRange::OneMonth),
            "3mo" => Ok(HistoryRange::ThreeMonths),
            "6mo" => Ok(HistoryRange::SixMonths),
            "1y" => Ok(HistoryRange::OneYear),
            "2y" => Ok(HistoryRange::TwoYears),
            "5y" => Ok(HistoryRange::FiveYears),
            other => Err(CompareError::domain(format!(
                "unknown history range: {} (expected 1mo, 3mo, 6mo, 1y, 2y or 5y)",
                other
            ))),
        }
    }
}

/// Source of historical closes and the current spot price
///
/// Failure here is fatal to a comparison run: without spot and history
/// there is nothing to price.
pub trait PriceHistoryProvider {
    fn price_history(&self, symbol: &str, lookback: HistoryRange) -> CompareResult<PriceHistory>;
}

/// Source of option expirations and per-expiry call quotes
///
/// A failed expiration list is fatal; a failed single chain is skipped by
/// the pipeline and the run continues.
pub trait OptionChainProvider {
    /// Available expiration dates for the underlying
    fn expirations(&self, symbol: &str) -> CompareResult<Vec<NaiveDate>>;

    /// Call quotes for one expiration, in provider strike order
    fn chain(&self, symbol: &str, expiry: NaiveDate) -> CompareResult<Vec<ChainQuote>>;
}

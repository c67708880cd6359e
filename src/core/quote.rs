//! Option quote data
//!
//! One market-observed chain row per (maturity, strike): the last traded
//! price the provider reported for that contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar days per year for time-to-maturity conversion
const DAYS_PER_YEAR: f64 = 365.0;

/// One market-observed option chain row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainQuote {
    /// Expiration date
    pub maturity: NaiveDate,
    /// Strike price
    pub strike: f64,
    /// Last traded market price
    pub market_price: f64,
}

impl ChainQuote {
    pub fn new(maturity: NaiveDate, strike: f64, market_price: f64) -> Self {
        Self {
            maturity,
            strike,
            market_price,
        }
    }

    /// Residual time to maturity in years from `as_of` (calendar days / 365).
    ///
    /// Non-positive for expired or same-day contracts; callers must filter
    /// those out before pricing.
    pub fn time_to_maturity(&self, as_of: NaiveDate) -> f64 {
        (self.maturity - as_of).num_days() as f64 / DAYS_PER_YEAR
    }
}

//! Chain comparator
//!
//! Prices every call quote in a chain under shared market inputs and
//! lines the theoretical price up against the market price. Individual
//! quotes that cannot be priced are recorded as skips, never as run
//! failures; bad shared inputs abort the whole comparison.

use std::fmt;

use chrono::NaiveDate;

use crate::core::{
    ChainQuote, CompareError, CompareResult, ComparisonRow, ComparisonTable, OptionType,
};
use crate::models::black_scholes::{price, PricingInput};

/// Why a single quote was left out of the table
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Quote matured on or before the valuation date
    Expired,
    /// Quote carries values no model price can be computed from
    Malformed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Expired => write!(f, "expired"),
            SkipReason::Malformed(detail) => write!(f, "malformed: {}", detail),
        }
    }
}

/// A quote dropped from the comparison, with the reason it was dropped
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSkip {
    pub quote: ChainQuote,
    pub reason: SkipReason,
}

/// Comparison output: the table plus everything that did not make it in
#[derive(Debug, Clone, Default)]
pub struct ChainComparison {
    pub table: ComparisonTable,
    pub skipped: Vec<QuoteSkip>,
}

/// Price one quote against the shared market inputs.
///
/// Returns the aligned row, or the quote bundled with a skip reason.
fn evaluate_quote(
    spot: f64,
    risk_free_rate: f64,
    volatility: f64,
    quote: &ChainQuote,
    as_of: NaiveDate,
) -> Result<ComparisonRow, QuoteSkip> {
    let time = quote.time_to_maturity(as_of);
    if time <= 0.0 {
        return Err(QuoteSkip {
            quote: quote.clone(),
            reason: SkipReason::Expired,
        });
    }

    if !quote.strike.is_finite() || quote.strike <= 0.0 {
        return Err(QuoteSkip {
            quote: quote.clone(),
            reason: SkipReason::Malformed(format!("strike {} is not positive", quote.strike)),
        });
    }

    if !quote.market_price.is_finite() || quote.market_price < 0.0 {
        return Err(QuoteSkip {
            quote: quote.clone(),
            reason: SkipReason::Malformed(format!(
                "market price {} is negative or undefined",
                quote.market_price
            )),
        });
    }

    let input = PricingInput::new(
        spot,
        quote.strike,
        time,
        risk_free_rate,
        volatility,
        OptionType::Call,
    );

    match price(&input) {
        Ok(theoretical) => Ok(ComparisonRow {
            maturity: quote.maturity,
            strike: quote.strike,
            market_price: quote.market_price,
            theoretical_price: theoretical,
        }),
        Err(e) => Err(QuoteSkip {
            quote: quote.clone(),
            reason: SkipReason::Malformed(e.to_string()),
        }),
    }
}

/// Compare a full set of quotes against their Black-Scholes prices.
///
/// Shared inputs are validated up front: a spot or volatility the model
/// cannot accept fails the run before any quote is touched. Quotes are
/// processed in input order and keep that order in the output table.
pub fn compare(
    spot: f64,
    risk_free_rate: f64,
    volatility: f64,
    quotes: &[ChainQuote],
    as_of: NaiveDate,
) -> CompareResult<ChainComparison> {
    if !spot.is_finite() || spot <= 0.0 {
        return Err(CompareError::domain(format!(
            "spot must be positive and finite, got {}",
            spot
        )));
    }
    if !volatility.is_finite() || volatility <= 0.0 {
        return Err(CompareError::domain(format!(
            "volatility must be positive and finite, got {}",
            volatility
        )));
    }
    if !risk_free_rate.is_finite() {
        return Err(CompareError::domain(format!(
            "risk-free rate must be finite, got {}",
            risk_free_rate
        )));
    }

    let mut comparison = ChainComparison::default();

    for quote in quotes {
        match evaluate_quote(spot, risk_free_rate, volatility, quote, as_of) {
            Ok(row) => comparison.table.push(row),
            Err(skip) => {
                tracing::warn!(
                    "Skipping quote {} @ {}: {}",
                    skip.quote.maturity,
                    skip.quote.strike,
                    skip.reason
                );
                comparison.skipped.push(skip);
            }
        }
    }

    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(maturity: NaiveDate, strike: f64) -> ChainQuote {
        ChainQuote::new(maturity, strike, 5.0)
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_rows_keep_input_order() {
        let far = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
        let near = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();

        // Deliberately not sorted by maturity or strike
        let quotes = vec![quote(far, 110.0), quote(near, 95.0), quote(far, 100.0)];

        let result = compare(100.0, 0.05, 0.2, &quotes, as_of()).unwrap();

        assert!(result.skipped.is_empty());
        let keys: Vec<(NaiveDate, f64)> = result
            .table
            .iter()
            .map(|r| (r.maturity, r.strike))
            .collect();
        assert_eq!(keys, vec![(far, 110.0), (near, 95.0), (far, 100.0)]);
    }

    #[test]
    fn test_two_of_three_survive_in_order() {
        let half_year_out = NaiveDate::from_ymd_opt(2025, 7, 17).unwrap();
        let five_weeks_back = NaiveDate::from_ymd_opt(2024, 12, 10).unwrap();
        let one_year_out = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        let quotes = vec![
            quote(half_year_out, 100.0),
            quote(five_weeks_back, 90.0),
            quote(one_year_out, 110.0),
        ];

        let result = compare(100.0, 0.05, 0.2, &quotes, as_of()).unwrap();

        let strikes: Vec<f64> = result.table.iter().map(|r| r.strike).collect();
        assert_eq!(strikes, vec![100.0, 110.0]);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].quote.strike, 90.0);
    }

    #[test]
    fn test_compare_is_deterministic() {
        let live = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let quotes = vec![quote(live, 95.0), quote(live, 100.0), quote(live, 105.0)];

        let first = compare(100.0, 0.05, 0.2, &quotes, as_of()).unwrap();
        let second = compare(100.0, 0.05, 0.2, &quotes, as_of()).unwrap();

        assert_eq!(first.table, second.table);
    }

    #[test]
    fn test_expired_quotes_are_skipped() {
        let expired = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let same_day = as_of();
        let live = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();

        let quotes = vec![quote(expired, 100.0), quote(same_day, 100.0), quote(live, 100.0)];

        let result = compare(100.0, 0.05, 0.2, &quotes, as_of()).unwrap();

        assert_eq!(result.table.len(), 1);
        assert_eq!(result.table.rows()[0].maturity, live);
        assert_eq!(result.skipped.len(), 2);
        assert!(result
            .skipped
            .iter()
            .all(|s| s.reason == SkipReason::Expired));
    }

    #[test]
    fn test_malformed_quote_does_not_fail_run() {
        let live = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let quotes = vec![
            quote(live, 100.0),
            ChainQuote::new(live, -5.0, 2.0),
            ChainQuote::new(live, 105.0, f64::NAN),
            quote(live, 110.0),
        ];

        let result = compare(100.0, 0.05, 0.2, &quotes, as_of()).unwrap();

        assert_eq!(result.table.len(), 2);
        assert_eq!(result.skipped.len(), 2);
        assert!(matches!(result.skipped[0].reason, SkipReason::Malformed(_)));
    }

    #[test]
    fn test_bad_shared_inputs_are_fatal() {
        let live = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let quotes = vec![quote(live, 100.0)];

        assert!(matches!(
            compare(0.0, 0.05, 0.2, &quotes, as_of()),
            Err(CompareError::Domain(_))
        ));
        assert!(matches!(
            compare(100.0, 0.05, -0.1, &quotes, as_of()),
            Err(CompareError::Domain(_))
        ));
        assert!(matches!(
            compare(100.0, f64::NAN, 0.2, &quotes, as_of()),
            Err(CompareError::Domain(_))
        ));
    }

    #[test]
    fn test_empty_chain_gives_empty_table() {
        let result = compare(100.0, 0.05, 0.2, &[], as_of()).unwrap();
        assert!(result.table.is_empty());
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_theoretical_price_matches_model() {
        let maturity = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let quotes = vec![ChainQuote::new(maturity, 100.0, 8.15)];

        let result = compare(100.0, 0.05, 0.2, &quotes, as_of()).unwrap();
        let row = &result.table.rows()[0];

        // One calendar year out: the classic S=K=100, r=5%, sigma=20% call
        assert!((row.theoretical_price - 10.45).abs() < 0.01);
        assert_eq!(row.market_price, 8.15);
    }
}

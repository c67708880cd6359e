//! Realized volatility estimation
//!
//! Converts a historical closing-price series into an annualized
//! volatility: log returns over consecutive closes, their dispersion
//! scaled by sqrt(periods_per_year). Dispersion is taken about zero
//! (the realized-volatility convention), so a lone return r estimates
//! |r| and a flat series estimates exactly zero.

use crate::core::{CompareError, CompareResult};

/// Log returns ln(p[i] / p[i-1]) over consecutive prices
///
/// Requires at least 2 strictly positive prices.
pub fn log_returns(prices: &[f64]) -> CompareResult<Vec<f64>> {
    if prices.len() < 2 {
        return Err(CompareError::domain(format!(
            "need at least 2 prices to form returns, got {}",
            prices.len()
        )));
    }
    if let Some(bad) = prices.iter().find(|p| !p.is_finite() || **p <= 0.0) {
        return Err(CompareError::domain(format!(
            "invalid price in history: {}",
            bad
        )));
    }

    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

/// Annualized realized volatility of a closing-price series
///
/// A zero estimate (flat price history) is a valid output here; the
/// pricer rejects it downstream.
pub fn realized_volatility(prices: &[f64], periods_per_year: u32) -> CompareResult<f64> {
    if periods_per_year == 0 {
        return Err(CompareError::domain("periods_per_year must be positive"));
    }

    let returns = log_returns(prices)?;
    let mean_square = returns.iter().map(|r| r * r).sum::<f64>() / returns.len() as f64;

    Ok(mean_square.sqrt() * (periods_per_year as f64).sqrt())
}

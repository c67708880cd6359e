//! Black-Scholes Model
//!
//! Closed-form European option pricing:
//!
//! ```text
//! d1 = (ln(S/K) + (r + 0.5*sigma^2)*T) / (sigma*sqrt(T))
//! d2 = d1 - sigma*sqrt(T)
//! call = S*N(d1) - K*exp(-r*T)*N(d2)
//! put  = K*exp(-r*T)*N(-d2) - S*N(-d1)
//! ```
//!
//! The formula divides by `sigma*sqrt(T)`, so inputs with non-positive
//! volatility or time to maturity are rejected up front rather than priced
//! to NaN. No iterative solving and no dividend yield.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{CompareError, CompareResult, OptionType};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Inputs for one Black-Scholes price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingInput {
    /// Spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years, strictly positive
    pub time_to_maturity: f64,
    /// Annualized risk-free rate
    pub risk_free_rate: f64,
    /// Annualized volatility, strictly positive
    pub volatility: f64,
    /// Option type
    pub option_type: OptionType,
}

impl PricingInput {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            volatility,
            option_type,
        }
    }

    /// Call-side input
    pub fn call(spot: f64, strike: f64, time_to_maturity: f64, rate: f64, vol: f64) -> Self {
        Self::new(spot, strike, time_to_maturity, rate, vol, OptionType::Call)
    }

    /// Put-side input
    pub fn put(spot: f64, strike: f64, time_to_maturity: f64, rate: f64, vol: f64) -> Self {
        Self::new(spot, strike, time_to_maturity, rate, vol, OptionType::Put)
    }

    fn validate(&self) -> CompareResult<()> {
        let finite = self.spot.is_finite()
            && self.strike.is_finite()
            && self.time_to_maturity.is_finite()
            && self.risk_free_rate.is_finite()
            && self.volatility.is_finite();
        if !finite {
            return Err(CompareError::domain("non-finite pricing input"));
        }
        if self.spot <= 0.0 {
            return Err(CompareError::domain(format!(
                "non-positive spot: {}",
                self.spot
            )));
        }
        if self.strike <= 0.0 {
            return Err(CompareError::domain(format!(
                "non-positive strike: {}",
                self.strike
            )));
        }
        if self.time_to_maturity <= 0.0 {
            return Err(CompareError::domain(format!(
                "non-positive time to maturity: {}",
                self.time_to_maturity
            )));
        }
        if self.volatility <= 0.0 {
            return Err(CompareError::domain(format!(
                "non-positive volatility: {}",
                self.volatility
            )));
        }
        Ok(())
    }
}

/// Black-Scholes European option price
///
/// Fails fast with a domain error when the model is undefined
/// (non-positive volatility, maturity, spot, or strike).
pub fn price(input: &PricingInput) -> CompareResult<f64> {
    input.validate()?;

    let PricingInput {
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        volatility,
        option_type,
    } = *input;

    let sqrt_t = time_to_maturity.sqrt();
    let d1 = ((spot / strike).ln()
        + (risk_free_rate + 0.5 * volatility * volatility) * time_to_maturity)
        / (volatility * sqrt_t);
    let d2 = d1 - volatility * sqrt_t;
    let discount = (-risk_free_rate * time_to_maturity).exp();

    Ok(match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
        OptionType::Put => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
    })
}

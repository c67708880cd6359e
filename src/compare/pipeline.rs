//! End-to-end comparison pipeline
//!
//! Fetch history, estimate volatility, fetch the option chain, compare,
//! export. Providers and the exporter come in through traits so the
//! whole run is testable offline.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::compare::comparator::{compare, ChainComparison};
use crate::core::{ChainQuote, CompareResult};
use crate::data::providers::{HistoryRange, OptionChainProvider, PriceHistoryProvider};
use crate::export::Exporter;
use crate::models::volatility::realized_volatility;

/// Configuration for one comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Underlying ticker symbol
    pub symbol: String,

    /// Annualized risk-free rate
    /// Default: 0.05
    pub risk_free_rate: f64,

    /// Price history lookback window
    /// Default: one year
    pub lookback: HistoryRange,

    /// Trading periods per year for volatility annualization
    /// Default: 252
    pub periods_per_year: u32,

    /// Valuation date; today (UTC) when unset
    pub as_of: Option<NaiveDate>,
}

impl RunConfig {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            risk_free_rate: 0.05,
            lookback: HistoryRange::OneYear,
            periods_per_year: 252,
            as_of: None,
        }
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Spot price the comparison was made at
    pub spot: f64,
    /// Annualized realized volatility fed to the model
    pub volatility: f64,
    /// Comparison table and skip diagnostics
    pub comparison: ChainComparison,
}

/// Run the full comparison for one underlying.
///
/// History and the expiration list are load-bearing: if either fails the
/// run fails. A single expiry whose chain cannot be fetched is logged
/// and dropped, so one bad maturity never empties the whole table.
pub fn run_comparison<H, C, E>(
    history_provider: &H,
    chain_provider: &C,
    exporter: &E,
    config: &RunConfig,
) -> CompareResult<RunOutcome>
where
    H: PriceHistoryProvider,
    C: OptionChainProvider,
    E: Exporter,
{
    let as_of = config.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let history = history_provider.price_history(&config.symbol, config.lookback)?;
    let volatility = realized_volatility(&history.closes, config.periods_per_year)?;

    tracing::info!(
        "{}: spot {:.2}, realized vol {:.4} from {} closes",
        config.symbol,
        history.spot,
        volatility,
        history.closes.len()
    );

    let expirations = chain_provider.expirations(&config.symbol)?;

    // Quotes land in maturity order, provider strike order within each
    let mut quotes: Vec<ChainQuote> = Vec::new();
    for expiry in expirations {
        match chain_provider.chain(&config.symbol, expiry) {
            Ok(chain) => quotes.extend(chain),
            Err(e) => {
                tracing::warn!("Failed to get chain for {}: {}", expiry, e);
            }
        }
    }

    let comparison = compare(
        history.spot,
        config.risk_free_rate,
        volatility,
        &quotes,
        as_of,
    )?;

    exporter.export(&comparison.table)?;

    Ok(RunOutcome {
        spot: history.spot,
        volatility,
        comparison,
    })
}

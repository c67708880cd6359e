//! bs-compare CLI
//!
//! Fetches market data for one underlying, prices its call chain with
//! Black-Scholes and prints the comparison next to market quotes.

use std::process;

use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bs_compare::compare::{run_comparison, RunConfig};
use bs_compare::data::{HistoryRange, YahooClient};
use bs_compare::export::CsvExporter;

/// Compare Black-Scholes prices against market option quotes
#[derive(Parser)]
#[command(
    name = "bs-compare",
    version,
    about = "Compare Black-Scholes prices against market option quotes"
)]
struct Cli {
    /// Underlying ticker symbol
    #[arg(default_value = "AAPL")]
    ticker: String,

    /// Annualized risk-free rate
    #[arg(long, default_value_t = 0.05)]
    rate: f64,

    /// Price history lookback (1mo, 3mo, 6mo, 1y, 2y, 5y)
    #[arg(long, default_value = "1y")]
    range: HistoryRange,

    /// Trading periods per year for volatility annualization
    #[arg(long, default_value_t = 252)]
    periods: u32,

    /// CSV output path
    #[arg(long, default_value = "option_comparison.csv")]
    output: String,

    /// Valuation date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = RunConfig {
        symbol: cli.ticker.clone(),
        risk_free_rate: cli.rate,
        lookback: cli.range,
        periods_per_year: cli.periods,
        as_of: cli.as_of,
    };

    let yahoo = YahooClient::new();
    let exporter = CsvExporter::new(&cli.output);

    match run_comparison(&yahoo, &yahoo, &exporter, &config) {
        Ok(outcome) => {
            println!(
                "{}: spot {:.2}, realized vol {:.2}%\n",
                cli.ticker,
                outcome.spot,
                outcome.volatility * 100.0
            );
            print!("{}", outcome.comparison.table.render());

            if !outcome.comparison.skipped.is_empty() {
                println!(
                    "\n{} quotes skipped (expired or malformed)",
                    outcome.comparison.skipped.len()
                );
            }

            println!("\nResults saved to {}", cli.output);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

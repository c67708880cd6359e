//! Comparison result table
//!
//! Append-only, ordered collection of per-quote comparison rows. Row order
//! is the enumeration order of the source (maturities, then strikes);
//! nothing here re-sorts or deduplicates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One aligned market-vs-model row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Expiration date
    #[serde(rename = "Maturity")]
    pub maturity: NaiveDate,
    /// Strike price
    #[serde(rename = "Strike")]
    pub strike: f64,
    /// Observed market price
    #[serde(rename = "MarketPrice")]
    pub market_price: f64,
    /// Black-Scholes theoretical price
    #[serde(rename = "TheoreticalPrice")]
    pub theoretical_price: f64,
}

/// Ordered collection of comparison rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTable {
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a row. Rows keep their insertion order.
    pub fn push(&mut self, row: ComparisonRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonRow> {
        self.rows.iter()
    }

    /// Fixed-width text table: one header line plus one line per row
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:>10}  {:>10}  {:>12}  {:>16}\n",
            "Maturity", "Strike", "MarketPrice", "TheoreticalPrice"
        ));

        for row in &self.rows {
            out.push_str(&format!(
                "{:>10}  {:>10.2}  {:>12.4}  {:>16.4}\n",
                row.maturity.to_string(),
                row.strike,
                row.market_price,
                row.theoretical_price
            ));
        }

        out
    }
}

impl<'a> IntoIterator for &'a ComparisonTable {
    type Item = &'a ComparisonRow;
    type IntoIter = std::slice::Iter<'a, ComparisonRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

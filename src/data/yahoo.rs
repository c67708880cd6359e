//! Yahoo Finance data fetcher
//!
//! Fetches free price history and option chains through Yahoo Finance's
//! unofficial API: the v8 chart endpoint for daily closes and spot, the
//! v7 options endpoint for expirations and per-expiry call quotes.
//!
//! Note: Yahoo Finance data is delayed ~15 minutes and intended for
//! personal use.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::core::{ChainQuote, CompareError, CompareResult};
use crate::data::providers::{
    HistoryRange, OptionChainProvider, PriceHistory, PriceHistoryProvider,
};

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: "https://query1.finance.yahoo.com".to_string(),
        }
    }

    fn fetch_options(
        &self,
        symbol: &str,
        expiry_ts: Option<i64>,
    ) -> CompareResult<YahooOptionChainData> {
        let url = match expiry_ts {
            Some(ts) => format!("{}/v7/finance/options/{}?date={}", self.base_url, symbol, ts),
            None => format!("{}/v7/finance/options/{}", self.base_url, symbol),
        };

        let response: YahooOptionsResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CompareError::network(e.to_string()))?
            .json()
            .map_err(|e| {
                CompareError::data_unavailable(format!("failed to parse options response: {}", e))
            })?;

        response
            .option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| {
                CompareError::data_unavailable(format!("no options data returned for {}", symbol))
            })
    }

    /// Convert one Yahoo call row to a quote; rows missing required
    /// fields are dropped.
    fn quote_from_row(&self, row: &YahooOptionRow, expiry: NaiveDate) -> Option<ChainQuote> {
        let strike = row.strike?;
        let last = row.last_price?;
        Some(ChainQuote::new(expiry, strike, last))
    }
}

impl PriceHistoryProvider for YahooClient {
    fn price_history(&self, symbol: &str, lookback: HistoryRange) -> CompareResult<PriceHistory> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url,
            symbol,
            lookback.as_token()
        );

        let response: YahooChartResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CompareError::network(e.to_string()))?
            .json()
            .map_err(|e| {
                CompareError::data_unavailable(format!("failed to parse chart response: {}", e))
            })?;

        let data = response.chart.result.into_iter().next().ok_or_else(|| {
            CompareError::data_unavailable(format!("no chart data returned for {}", symbol))
        })?;

        // Daily bars with no trade come back as nulls; drop them.
        let closes: Vec<f64> = data
            .indicators
            .quote
            .first()
            .map(|block| block.close.iter().flatten().copied().collect())
            .unwrap_or_default();

        let last_close = match closes.last() {
            Some(close) => *close,
            None => {
                return Err(CompareError::data_unavailable(format!(
                    "no closing prices returned for {}",
                    symbol
                )))
            }
        };

        let spot = data.meta.regular_market_price.unwrap_or(last_close);

        tracing::info!(
            "Fetched {} closes for {} (spot {:.2})",
            closes.len(),
            symbol,
            spot
        );

        Ok(PriceHistory {
            symbol: symbol.to_string(),
            closes,
            spot,
        })
    }
}

impl OptionChainProvider for YahooClient {
    fn expirations(&self, symbol: &str) -> CompareResult<Vec<NaiveDate>> {
        let chain_data = self.fetch_options(symbol, None)?;

        let expiries: Vec<NaiveDate> = chain_data
            .expiration_dates
            .iter()
            .filter_map(|&ts| DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive()))
            .collect();

        if expiries.is_empty() {
            return Err(CompareError::data_unavailable(format!(
                "no option expirations returned for {}",
                symbol
            )));
        }

        Ok(expiries)
    }

    fn chain(&self, symbol: &str, expiry: NaiveDate) -> CompareResult<Vec<ChainQuote>> {
        // Yahoo keys chains by the expiry's midnight-UTC timestamp
        let expiry_ts = expiry
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp();

        let chain_data = self.fetch_options(symbol, Some(expiry_ts))?;

        let mut quotes = Vec::new();
        if let Some(options) = chain_data.options.first() {
            for row in &options.calls {
                match self.quote_from_row(row, expiry) {
                    Some(quote) => quotes.push(quote),
                    None => {
                        tracing::debug!("Dropping incomplete call row for {} {}", symbol, expiry)
                    }
                }
            }
        }

        Ok(quotes)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Vec<YahooChartData>,
}

#[derive(Debug, Deserialize)]
struct YahooChartData {
    meta: YahooChartMeta,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteBlock {
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct YahooOptionsResponse {
    #[serde(rename = "optionChain")]
    option_chain: YahooOptionChain,
}

#[derive(Debug, Deserialize)]
struct YahooOptionChain {
    result: Vec<YahooOptionChainData>,
}

#[derive(Debug, Deserialize)]
struct YahooOptionChainData {
    #[serde(rename = "expirationDates")]
    expiration_dates: Vec<i64>,
    options: Vec<YahooOptions>,
}

#[derive(Debug, Deserialize)]
struct YahooOptions {
    calls: Vec<YahooOptionRow>,
}

#[derive(Debug, Deserialize)]
struct YahooOptionRow {
    strike: Option<f64>,
    #[serde(rename = "lastPrice")]
    last_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chart_response() {
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": {"regularMarketPrice": 189.87},
                    "timestamp": [1700000000, 1700086400, 1700172800],
                    "indicators": {
                        "quote": [{"close": [187.44, null, 189.71]}]
                    }
                }],
                "error": null
            }
        }"#;

        let response: YahooChartResponse = serde_json::from_str(json).unwrap();
        let data = &response.chart.result[0];

        assert_eq!(data.meta.regular_market_price, Some(189.87));

        let closes: Vec<f64> = data.indicators.quote[0].close.iter().flatten().copied().collect();
        assert_eq!(closes, vec![187.44, 189.71]);
    }

    #[test]
    fn test_parse_options_response() {
        let json = r#"{
            "optionChain": {
                "result": [{
                    "expirationDates": [1718928000, 1721606400],
                    "options": [{
                        "calls": [
                            {"contractSymbol": "AAPL240621C00100000", "strike": 100.0, "lastPrice": 90.1, "bid": 89.0, "ask": 91.0},
                            {"strike": 105.0},
                            {"strike": 110.0, "lastPrice": 80.4}
                        ],
                        "puts": []
                    }]
                }],
                "error": null
            }
        }"#;

        let response: YahooOptionsResponse = serde_json::from_str(json).unwrap();
        let data = &response.option_chain.result[0];

        assert_eq!(data.expiration_dates.len(), 2);

        let client = YahooClient::new();
        let expiry = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let quotes: Vec<ChainQuote> = data.options[0]
            .calls
            .iter()
            .filter_map(|row| client.quote_from_row(row, expiry))
            .collect();

        // The row without a last price is dropped
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].strike, 100.0);
        assert_eq!(quotes[1].strike, 110.0);
    }

    #[test]
    #[ignore] // Requires network
    fn test_price_history_live() {
        let client = YahooClient::new();
        let history = client.price_history("AAPL", HistoryRange::OneMonth).unwrap();

        assert!(history.spot > 0.0);
        assert!(history.closes.len() > 5);
    }

    #[test]
    #[ignore] // Requires network
    fn test_option_chain_live() {
        let client = YahooClient::new();
        let expiries = client.expirations("AAPL").unwrap();
        assert!(!expiries.is_empty());

        let quotes = client.chain("AAPL", expiries[0]).unwrap();
        assert!(!quotes.is_empty());
    }
}

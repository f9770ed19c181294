//! Historical closing-price retrieval
//!
//! Wraps the Yahoo-style chart endpoint: one blocking GET per ticker,
//! daily interval, parsed into a [`PriceSeries`]. No retry; failures
//! propagate to the caller.

use crate::error::{MarketDataError, Result};
use crate::series::{PricePoint, PriceSeries};
use chrono::{DateTime, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_CHART_BASE: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Request timeout for the data provider
const REQUEST_TIMEOUT_SECS: u64 = 10;

// Overridable so tests and offline setups can point at a local server.
static CHART_BASE: Lazy<String> = Lazy::new(|| {
    std::env::var("MARKET_DATA_CHART_URL").unwrap_or_else(|_| DEFAULT_CHART_BASE.to_string())
});

/// Client for fetching historical daily closes
#[derive(Debug, Clone)]
pub struct ChartClient {
    base_url: String,
}

impl ChartClient {
    /// Create a client against the configured chart endpoint
    pub fn new() -> Self {
        Self {
            base_url: CHART_BASE.clone(),
        }
    }

    /// Create a client against an explicit endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fetch daily closing prices for `ticker` between `start` and `end`
    /// (inclusive start, exclusive end, matching the provider convention).
    ///
    /// The returned series is non-empty with strictly increasing dates;
    /// an empty provider response is a data error.
    pub fn daily_closes(&self, ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<PriceSeries> {
        let url = format!(
            "{}/{}?period1={}&period2={}&interval=1d",
            self.base_url,
            ticker,
            midnight_timestamp(start),
            midnight_timestamp(end),
        );

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let resp = client.get(&url).send()?;
        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            return Err(MarketDataError::ProviderStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: Value = serde_json::from_str(&text)
            .map_err(|e| MarketDataError::DataError(format!("Malformed chart payload: {}", e)))?;

        let points = parse_chart_points(&json)?;
        if points.is_empty() {
            return Err(MarketDataError::DataError(format!(
                "No price data returned for {}",
                ticker
            )));
        }

        PriceSeries::new(points)
    }
}

impl Default for ChartClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract (date, close) observations from a chart payload.
///
/// Null closes (holidays, halts) are skipped rather than treated as zero.
fn parse_chart_points(json: &Value) -> Result<Vec<PricePoint>> {
    let result = json["chart"]["result"]
        .as_array()
        .and_then(|r| r.first())
        .ok_or_else(|| MarketDataError::DataError("Chart payload has no result".to_string()))?;

    let timestamps = result["timestamp"]
        .as_array()
        .ok_or_else(|| MarketDataError::DataError("Chart payload has no timestamps".to_string()))?;

    let closes = result["indicators"]["quote"]
        .as_array()
        .and_then(|q| q.first())
        .and_then(|q| q["close"].as_array())
        .ok_or_else(|| MarketDataError::DataError("Chart payload has no close prices".to_string()))?;

    let mut points = Vec::with_capacity(timestamps.len());
    for (ts, close) in timestamps.iter().zip(closes.iter()) {
        let (Some(ts), Some(close)) = (ts.as_i64(), close.as_f64()) else {
            continue;
        };

        let date = DateTime::from_timestamp(ts, 0)
            .ok_or_else(|| {
                MarketDataError::DataError(format!("Timestamp {} out of range", ts))
            })?
            .date_naive();

        points.push(PricePoint { date, close });
    }

    Ok(points)
}

fn midnight_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chart_payload() {
        // 2023-01-02, 2023-01-03, 2023-01-04 with one null close
        let payload: Value = serde_json::from_str(
            r#"{
                "chart": {
                    "result": [{
                        "timestamp": [1672617600, 1672704000, 1672790400],
                        "indicators": {
                            "quote": [{"close": [125.07, null, 126.36]}]
                        }
                    }]
                }
            }"#,
        )
        .unwrap();

        let points = parse_chart_points(&payload).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, "2023-01-02".parse().unwrap());
        assert_eq!(points[0].close, 125.07);
        assert_eq!(points[1].date, "2023-01-04".parse().unwrap());
    }

    #[test]
    fn rejects_payload_without_result() {
        let payload: Value = serde_json::from_str(r#"{"chart": {"result": []}}"#).unwrap();
        assert!(parse_chart_points(&payload).is_err());
    }
}

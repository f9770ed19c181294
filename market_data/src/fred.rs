//! Risk-free rate retrieval
//!
//! Fetches the latest 10-year Treasury constant-maturity rate (FRED series
//! GS10). This is the only guarded fetch in the pipeline: any failure
//! (missing API key, transport error, malformed payload, empty series)
//! falls back to a fixed rate rather than propagating.

use crate::error::{MarketDataError, Result};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_FRED_BASE: &str = "https://api.stlouisfed.org/fred/series/observations";

/// FRED series for the 10-year Treasury constant-maturity rate
const SERIES_ID: &str = "GS10";

/// Rate used whenever the provider cannot be reached
pub const FALLBACK_RISK_FREE_RATE: f64 = 0.045;

const REQUEST_TIMEOUT_SECS: u64 = 10;

static FRED_BASE: Lazy<String> = Lazy::new(|| {
    std::env::var("MARKET_DATA_FRED_URL").unwrap_or_else(|_| DEFAULT_FRED_BASE.to_string())
});

/// Client for the economic-data provider
#[derive(Debug, Clone)]
pub struct RiskFreeRateClient {
    base_url: String,
    api_key: Option<String>,
}

impl RiskFreeRateClient {
    /// Create a client, reading the API key from `FRED_API_KEY`
    pub fn new() -> Self {
        Self {
            base_url: FRED_BASE.clone(),
            api_key: std::env::var("FRED_API_KEY").ok(),
        }
    }

    /// Create a client with an explicit key (or none, forcing the fallback)
    pub fn with_api_key(api_key: Option<String>) -> Self {
        Self {
            base_url: FRED_BASE.clone(),
            api_key,
        }
    }

    /// Latest 10-year rate as a decimal fraction, or the fallback constant.
    ///
    /// Never fails; the fallback covers every error path.
    pub fn ten_year_rate(&self) -> f64 {
        self.try_ten_year_rate().unwrap_or(FALLBACK_RISK_FREE_RATE)
    }

    /// Latest 10-year rate, surfacing the failure instead of falling back
    pub fn try_ten_year_rate(&self) -> Result<f64> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            MarketDataError::DataError("FRED_API_KEY is not configured".to_string())
        })?;

        let url = format!(
            "{}?series_id={}&api_key={}&file_type=json&sort_order=desc&limit=10",
            self.base_url, SERIES_ID, api_key
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
            .map_err(|e| MarketDataError::DataError(format!("Malformed rate payload: {}", e)))?;

        latest_rate(&json)
    }
}

impl Default for RiskFreeRateClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the most recent parseable observation; the provider marks missing
/// values with "." instead of omitting them.
fn latest_rate(json: &Value) -> Result<f64> {
    let observations = json["observations"]
        .as_array()
        .ok_or_else(|| MarketDataError::DataError("Rate payload has no observations".to_string()))?;

    observations
        .iter()
        .filter_map(|obs| obs["value"].as_str())
        .find_map(|value| value.parse::<f64>().ok())
        .map(|percent| percent / 100.0)
        .ok_or_else(|| MarketDataError::DataError("No usable rate observation".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_latest_observation() {
        let payload: Value = serde_json::from_str(
            r#"{"observations": [
                {"date": "2024-06-01", "value": "."},
                {"date": "2024-05-01", "value": "4.48"},
                {"date": "2024-04-01", "value": "4.54"}
            ]}"#,
        )
        .unwrap();

        let rate = latest_rate(&payload).unwrap();
        assert_relative_eq!(rate, 0.0448, epsilon = 1e-12);
    }

    #[test]
    fn missing_key_falls_back() {
        let client = RiskFreeRateClient::with_api_key(None);
        assert_eq!(client.ten_year_rate(), FALLBACK_RISK_FREE_RATE);
    }

    #[test]
    fn all_values_missing_is_an_error() {
        let payload: Value =
            serde_json::from_str(r#"{"observations": [{"date": "2024-06-01", "value": "."}]}"#)
                .unwrap();
        assert!(latest_rate(&payload).is_err());
    }
}

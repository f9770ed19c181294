//! Error types for the market_data crate

use thiserror::Error;

/// Custom error types for the market_data crate
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// Error related to series validation or construction
    #[error("Series error: {0}")]
    SeriesError(String),

    /// Error related to missing or empty provider data
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from the HTTP transport
    #[error("Request error: {0}")]
    RequestError(String),

    /// Non-success status from a data provider
    #[error("Provider returned status {status}: {body}")]
    ProviderStatus { status: u16, body: String },

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, MarketDataError>;

impl From<reqwest::Error> for MarketDataError {
    fn from(err: reqwest::Error) -> Self {
        MarketDataError::RequestError(err.to_string())
    }
}

//! Error types for the price_forecast crate

use thiserror::Error;

/// Custom error types for the price_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to input data validation
    #[error("Data error: {0}")]
    DataError(String),

    /// Error fitting a model to the data
    #[error("Model fit error: {0}")]
    ModelFit(String),

    /// Error related to result validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from mathematical operations
    #[error("Math error: {0}")]
    MathError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

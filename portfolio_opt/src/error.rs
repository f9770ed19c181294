//! Error types for the portfolio_opt crate

use thiserror::Error;

/// Custom error types for the portfolio_opt crate
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// Error related to input validation
    #[error("Input error: {0}")]
    InputError(String),

    /// Error related to the covariance matrix
    #[error("Covariance error: {0}")]
    CovarianceError(String),

    /// Error from mathematical operations
    #[error("Math error: {0}")]
    MathError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, OptimizeError>;

//! Forecast evaluation against held-out data

use crate::error::{ForecastError, Result};
use serde::Serialize;
use std::fmt;

/// Accuracy metrics for a forecast against actual values
#[derive(Debug, Clone, Serialize)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error
    pub mape: f64,
}

impl fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  MSE:   {:.4}", self.mse)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAPE:  {:.4}%", self.mape)?;
        Ok(())
    }
}

fn check_lengths(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.len() != predicted.len() || actual.is_empty() {
        return Err(ForecastError::ValidationError(format!(
            "Actual ({}) and predicted ({}) values must have the same non-zero length",
            actual.len(),
            predicted.len()
        )));
    }
    Ok(())
}

/// Mean absolute error between actual and predicted sequences
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();

    Ok(sum / actual.len() as f64)
}

/// Mean squared error between actual and predicted sequences
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    Ok(sum / actual.len() as f64)
}

/// Root mean squared error between actual and predicted sequences
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    Ok(mean_squared_error(actual, predicted)?.sqrt())
}

/// Mean absolute percentage error; zero actual values are skipped
pub fn mean_absolute_percentage_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, _)| **a != 0.0)
        .map(|(a, p)| ((a - p).abs() / a.abs()) * 100.0)
        .sum();

    Ok(sum / actual.len() as f64)
}

/// Compute the full accuracy report for a forecast
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Result<ForecastAccuracy> {
    let mae = mean_absolute_error(actual, predicted)?;
    let mse = mean_squared_error(actual, predicted)?;
    let mape = mean_absolute_percentage_error(actual, predicted)?;

    Ok(ForecastAccuracy {
        mae,
        mse,
        rmse: mse.sqrt(),
        mape,
    })
}

//! Forecasting models for numeric time series

use crate::error::{ForecastError, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt::Debug;

/// Forecast result containing predicted values
#[derive(Debug, Clone)]
pub struct ForecastResult {
    /// Forecasted values
    values: Vec<f64>,
    /// Number of periods forecasted
    horizon: usize,
    /// Confidence intervals (optional)
    intervals: Option<Vec<(f64, f64)>>,
}

impl ForecastResult {
    /// Create a new forecast result
    pub fn new(values: Vec<f64>, horizon: usize) -> Result<Self> {
        if values.len() != horizon {
            return Err(ForecastError::ValidationError(format!(
                "Values length ({}) doesn't match horizon ({})",
                values.len(),
                horizon
            )));
        }

        Ok(Self {
            values,
            horizon,
            intervals: None,
        })
    }

    /// Attach confidence intervals to the result
    pub fn with_intervals(mut self, intervals: Vec<(f64, f64)>) -> Result<Self> {
        if intervals.len() != self.values.len() {
            return Err(ForecastError::ValidationError(format!(
                "Intervals length ({}) doesn't match values length ({})",
                intervals.len(),
                self.values.len()
            )));
        }

        self.intervals = Some(intervals);
        Ok(self)
    }

    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of periods forecasted
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Get the confidence intervals, if attached
    pub fn intervals(&self) -> Option<&[(f64, f64)]> {
        self.intervals.as_deref()
    }

    /// Generate symmetric confidence intervals around the forecast.
    ///
    /// `residual_std` is the standard deviation of the fitted model's
    /// residuals; the z-quantile comes from the standard normal.
    pub fn confidence_intervals(
        &self,
        confidence_level: f64,
        residual_std: f64,
    ) -> Result<Vec<(f64, f64)>> {
        if confidence_level <= 0.0 || confidence_level >= 1.0 {
            return Err(ForecastError::ValidationError(
                "Confidence level must be between 0 and 1".to_string(),
            ));
        }

        let normal = Normal::new(0.0, 1.0).map_err(|e| ForecastError::MathError(e.to_string()))?;
        let z = normal.inverse_cdf(0.5 + confidence_level / 2.0);

        Ok(self
            .values
            .iter()
            .map(|v| {
                let margin = z * residual_std;
                (*v - margin, *v + margin)
            })
            .collect())
    }
}

/// Forecast model that can be fitted to a numeric sequence
pub trait ForecastModel: Debug + Clone {
    /// The type of fitted model produced
    type Trained: TrainedForecastModel;

    /// Fit the model to a historical sequence
    fn fit(&self, data: &[f64]) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

/// Fitted forecast model
pub trait TrainedForecastModel: Debug {
    /// Generate exactly `horizon` predictions for the following periods
    fn forecast(&self, horizon: usize) -> Result<ForecastResult>;

    /// Name of the model
    fn name(&self) -> &str;
}

pub mod arima;
pub mod auto;

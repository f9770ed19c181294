//! Forward-looking forecast series

use crate::error::{ForecastError, Result};
use crate::utils::business_days_after;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single forecast observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Forecast business day
    pub date: NaiveDate,
    /// Predicted value
    pub value: f64,
}

/// Forecast values stamped on contiguous business days starting
/// immediately after the training window ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    /// Stamp forecast values onto the business days following
    /// `last_training_date`
    pub fn from_values(last_training_date: NaiveDate, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::ValidationError(
                "Forecast series cannot be empty".to_string(),
            ));
        }

        let dates = business_days_after(last_training_date, values.len())?;
        let points = dates
            .into_iter()
            .zip(values)
            .map(|(date, value)| ForecastPoint { date, value })
            .collect();

        Ok(Self { points })
    }

    /// Number of forecast periods
    pub fn horizon(&self) -> usize {
        self.points.len()
    }

    /// The observations in date order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Predicted values in date order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// First forecast day
    pub fn start_date(&self) -> NaiveDate {
        self.points[0].date
    }

    /// Last forecast day
    pub fn end_date(&self) -> NaiveDate {
        self.points[self.points.len() - 1].date
    }
}

impl fmt::Display for ForecastSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            writeln!(f, "  {}  {:>10.4}", point.date, point.value)?;
        }
        Ok(())
    }
}

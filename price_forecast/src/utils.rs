//! Utility functions for the price_forecast crate

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// Split a sequence into training and test sets by train fraction.
///
/// A ratio outside `(0, 1)`, or one that would leave either side empty,
/// returns the whole sequence as the training set.
pub fn train_test_split(data: &[f64], train_ratio: f64) -> (Vec<f64>, Vec<f64>) {
    if data.is_empty() || train_ratio <= 0.0 || train_ratio >= 1.0 {
        return (data.to_vec(), Vec::new());
    }

    let train_size = (data.len() as f64 * train_ratio) as usize;
    if train_size == 0 || train_size >= data.len() {
        return (data.to_vec(), Vec::new());
    }

    (data[..train_size].to_vec(), data[train_size..].to_vec())
}

/// Whether a date falls on a trading weekday
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The `count` contiguous business days strictly after `start`
pub fn business_days_after(start: NaiveDate, count: usize) -> Result<Vec<NaiveDate>> {
    let mut days = Vec::with_capacity(count);
    let mut current = start;

    while days.len() < count {
        current = current.succ_opt().ok_or_else(|| {
            ForecastError::ValidationError("Forecast dates exceed the supported range".to_string())
        })?;

        if is_business_day(current) {
            days.push(current);
        }
    }

    Ok(days)
}

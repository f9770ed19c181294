//! Price and return series for portfolio analysis
//!
//! A [`PriceSeries`] is an ordered sequence of (date, close) observations
//! with strictly increasing dates, one entry per trading day. It is
//! validated at construction and immutable afterwards. A [`ReturnSeries`]
//! is derived from it by pairwise relative difference and is exactly one
//! entry shorter than its source.

use crate::error::{MarketDataError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single closing-price observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day of the observation
    pub date: NaiveDate,
    /// Closing price
    pub close: f64,
}

/// Ordered closing prices for one security
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

/// A single period-over-period return observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnPoint {
    /// Trading day the return was realized on (the later day of the pair)
    pub date: NaiveDate,
    /// Relative price change versus the previous trading day
    pub value: f64,
}

/// Ordered period-over-period returns derived from a [`PriceSeries`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    points: Vec<ReturnPoint>,
}

impl PriceSeries {
    /// Create a price series, validating the date ordering invariant.
    ///
    /// The series must be non-empty and dates must be strictly increasing
    /// (no duplicates, no out-of-order entries).
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(MarketDataError::DataError(
                "Empty price series".to_string(),
            ));
        }

        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(MarketDataError::SeriesError(format!(
                    "Dates must be strictly increasing: {} followed by {}",
                    pair[0].date, pair[1].date
                )));
            }
        }

        Ok(Self { points })
    }

    /// Create a price series from parallel date and close vectors.
    pub fn from_parts(dates: Vec<NaiveDate>, closes: Vec<f64>) -> Result<Self> {
        if dates.len() != closes.len() {
            return Err(MarketDataError::SeriesError(format!(
                "Dates length ({}) doesn't match closes length ({})",
                dates.len(),
                closes.len()
            )));
        }

        let points = dates
            .into_iter()
            .zip(closes)
            .map(|(date, close)| PricePoint { date, close })
            .collect();

        Self::new(points)
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no observations (never true for a
    /// successfully constructed series)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The observations in date order
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices in date order
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Observation dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// The most recent observation
    pub fn last(&self) -> &PricePoint {
        // new() guarantees at least one point
        &self.points[self.points.len() - 1]
    }

    /// Closing price of the most recent observation
    pub fn last_close(&self) -> f64 {
        self.last().close
    }

    /// Date of the most recent observation
    pub fn last_date(&self) -> NaiveDate {
        self.last().date
    }

    /// Derive the period-over-period return series.
    ///
    /// The result has exactly `len() - 1` entries, each dated on the later
    /// observation of its pair.
    pub fn returns(&self) -> ReturnSeries {
        let points = self
            .points
            .windows(2)
            .map(|pair| ReturnPoint {
                date: pair[1].date,
                value: pair[1].close / pair[0].close - 1.0,
            })
            .collect();

        ReturnSeries { points }
    }
}

impl ReturnSeries {
    /// Number of return observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The observations in date order
    pub fn points(&self) -> &[ReturnPoint] {
        &self.points
    }

    /// Return values in date order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Calculate period-over-period returns from a plain price slice.
///
/// Returns an empty vector for fewer than two prices.
pub fn pct_change(prices: &[f64]) -> Vec<f64> {
    if prices.len() < 2 {
        return Vec::new();
    }

    prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

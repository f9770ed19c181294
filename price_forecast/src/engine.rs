//! Forecast pipeline orchestration
//!
//! One engine invocation is a strictly linear pass: derive the model input
//! from the price series, search for the best ARIMA order, forecast the
//! requested horizon, and map the result back onto forward business days.
//! No state is retained across calls.

use crate::error::{ForecastError, Result};
use crate::evaluate::{self, ForecastAccuracy};
use crate::models::arima::ArimaModel;
use crate::models::auto::AutoArima;
use crate::models::{ForecastModel, TrainedForecastModel};
use crate::reconstruct::reconstruct_prices;
use crate::series::ForecastSeries;
use crate::utils::train_test_split;
use market_data::{pct_change, PriceSeries};

/// What the engine fits the model to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastTarget {
    /// Fit the raw closing prices directly
    Prices,
    /// Fit period-over-period returns, then compound the forecast back
    /// into a price path from the last known close
    Returns,
}

/// Outcome of one forecast invocation
#[derive(Debug, Clone)]
pub struct ForecastOutcome {
    /// Predicted prices on forward business days
    pub forecast: ForecastSeries,
    /// Orders (p, d, q) of the selected model
    pub order: (usize, usize, usize),
    /// Held-out accuracy, when the split leaves a test window
    pub holdout: Option<ForecastAccuracy>,
}

/// ARIMA-based forecast engine with automatic order selection
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    target: ForecastTarget,
    horizon: usize,
    train_ratio: f64,
    search: AutoArima,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self {
            target: ForecastTarget::Returns,
            horizon: 90,
            train_ratio: 0.8,
            search: AutoArima::default(),
        }
    }
}

impl ForecastEngine {
    /// Engine with the default configuration: return-based forecasting,
    /// 90 business days ahead, 80/20 holdout split
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the forecast horizon (number of business days)
    pub fn horizon(mut self, horizon: usize) -> Result<Self> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Forecast horizon must be at least 1".to_string(),
            ));
        }
        self.horizon = horizon;
        Ok(self)
    }

    /// Choose whether to fit prices or returns
    pub fn target(mut self, target: ForecastTarget) -> Self {
        self.target = target;
        self
    }

    /// Set the training fraction used for held-out evaluation
    pub fn train_ratio(mut self, train_ratio: f64) -> Result<Self> {
        if train_ratio <= 0.0 || train_ratio >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "Train ratio must be between 0 and 1".to_string(),
            ));
        }
        self.train_ratio = train_ratio;
        Ok(self)
    }

    /// Print the order-search diagnostics to the console
    pub fn trace(mut self, trace: bool) -> Self {
        self.search = self.search.with_trace(trace);
        self
    }

    /// Use a custom order-search grid
    pub fn search(mut self, search: AutoArima) -> Self {
        self.search = search;
        self
    }

    /// Run the pipeline on a price series.
    ///
    /// The forecast covers exactly the configured horizon; a series too
    /// short for every candidate order fails with a model-fit error.
    pub fn forecast(&self, series: &PriceSeries) -> Result<ForecastOutcome> {
        let closes = series.closes();

        let input = match self.target {
            ForecastTarget::Prices => closes,
            ForecastTarget::Returns => {
                if closes.len() < 2 {
                    return Err(ForecastError::DataError(
                        "At least two observations are needed to compute returns".to_string(),
                    ));
                }
                pct_change(&closes)
            }
        };

        let best = self.search.search(&input)?;
        let holdout = self.holdout_accuracy(&input, best.order());

        let predicted = best.forecast(self.horizon)?;
        let values = match self.target {
            ForecastTarget::Prices => predicted.values().to_vec(),
            ForecastTarget::Returns => reconstruct_prices(series.last_close(), predicted.values()),
        };

        Ok(ForecastOutcome {
            forecast: ForecastSeries::from_values(series.last_date(), values)?,
            order: best.order(),
            holdout,
        })
    }

    /// Refit the selected order on the training window and score it on the
    /// held-out tail. Best-effort: a window too short to refit yields None.
    fn holdout_accuracy(
        &self,
        input: &[f64],
        order: (usize, usize, usize),
    ) -> Option<ForecastAccuracy> {
        let (train, test) = train_test_split(input, self.train_ratio);
        if test.is_empty() {
            return None;
        }

        let (p, d, q) = order;
        let trained = ArimaModel::new(p, d, q).ok()?.fit(&train).ok()?;
        let predicted = trained.forecast(test.len()).ok()?;
        evaluate::evaluate(&test, predicted.values()).ok()
    }
}

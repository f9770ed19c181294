//! Automatic ARIMA order selection
//!
//! Fits every candidate `(p, d, q)` in the configured grid and keeps the
//! fit with the lowest AIC. Candidates the data cannot support are skipped;
//! if nothing in the grid fits, the search fails with a model-fit error.

use crate::error::{ForecastError, Result};
use crate::models::arima::{ArimaModel, TrainedArimaModel, MAX_DIFFERENCING, MAX_ORDER};
use crate::models::{ForecastModel, TrainedForecastModel};

/// Automatic order search over ARIMA candidates
#[derive(Debug, Clone)]
pub struct AutoArima {
    max_p: usize,
    max_d: usize,
    max_q: usize,
    trace: bool,
}

impl Default for AutoArima {
    /// The default grid: `p <= 5`, `d <= 2`, `q <= 5`
    fn default() -> Self {
        Self {
            max_p: 5,
            max_d: 2,
            max_q: 5,
            trace: false,
        }
    }
}

impl AutoArima {
    /// Create a search over a custom order grid
    pub fn new(max_p: usize, max_d: usize, max_q: usize) -> Result<Self> {
        if max_p > MAX_ORDER || max_q > MAX_ORDER {
            return Err(ForecastError::InvalidParameter(format!(
                "Order grid must stay within p, q <= {}",
                MAX_ORDER
            )));
        }
        if max_d > MAX_DIFFERENCING {
            return Err(ForecastError::InvalidParameter(format!(
                "Differencing grid must stay within d <= {}",
                MAX_DIFFERENCING
            )));
        }

        Ok(Self {
            max_p,
            max_d,
            max_q,
            trace: false,
        })
    }

    /// Print one diagnostic line per candidate during the search
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Search the grid and return the best fit by AIC
    pub fn search(&self, data: &[f64]) -> Result<TrainedArimaModel> {
        let mut best: Option<(f64, TrainedArimaModel)> = None;
        let mut skipped = 0usize;

        for d in 0..=self.max_d {
            for p in 0..=self.max_p {
                for q in 0..=self.max_q {
                    let trained = match ArimaModel::new(p, d, q)?.fit(data) {
                        Ok(trained) => trained,
                        Err(_) => {
                            skipped += 1;
                            continue;
                        }
                    };

                    let aic = trained.aic();
                    if !aic.is_finite() {
                        skipped += 1;
                        continue;
                    }

                    if self.trace {
                        println!("  {:<14} AIC={:.3}", trained.name(), aic);
                    }

                    if best.as_ref().map_or(true, |(best_aic, _)| aic < *best_aic) {
                        best = Some((aic, trained));
                    }
                }
            }
        }

        match best {
            Some((aic, trained)) => {
                if self.trace {
                    println!("Best model: {} (AIC={:.3}, {} skipped)", trained.name(), aic, skipped);
                }
                Ok(trained)
            }
            None => Err(ForecastError::ModelFit(format!(
                "No ARIMA order could be fitted on {} observations",
                data.len()
            ))),
        }
    }
}

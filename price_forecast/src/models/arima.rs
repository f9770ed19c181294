//! ARIMA model for time series forecasting
//!
//! Fitting is conditional: the series is differenced `d` times, AR
//! coefficients are estimated from the Yule-Walker equations via
//! Levinson-Durbin, and MA coefficients from the autocorrelation of the AR
//! residuals. Forecasts run the recursion forward on the differenced scale
//! and are integrated back through the stored tail of each differencing
//! level.

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};

/// Largest supported AR/MA order
pub const MAX_ORDER: usize = 10;

/// Largest supported differencing order
pub const MAX_DIFFERENCING: usize = 2;

/// Observations required beyond the order terms for a usable fit
const MIN_EXTRA_OBSERVATIONS: usize = 10;

/// ARIMA model (AutoRegressive Integrated Moving Average)
#[derive(Debug, Clone)]
pub struct ArimaModel {
    /// Name of the model
    name: String,
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
}

/// Fitted ARIMA model
#[derive(Debug, Clone)]
pub struct TrainedArimaModel {
    /// Name of the model
    name: String,
    /// AR order (p)
    p: usize,
    /// MA order (q)
    q: usize,
    /// Fitted AR coefficients
    ar_coefficients: Vec<f64>,
    /// Fitted MA coefficients
    ma_coefficients: Vec<f64>,
    /// Mean of the differenced series
    constant: f64,
    /// Series after differencing
    differenced_data: Vec<f64>,
    /// Last value of each differencing level, innermost last
    level_tails: Vec<f64>,
    /// Residuals from fitting
    residuals: Vec<f64>,
}

impl ArimaModel {
    /// Create a new ARIMA model with the given orders
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if p > MAX_ORDER {
            return Err(ForecastError::InvalidParameter(format!(
                "AR order must be <= {}",
                MAX_ORDER
            )));
        }
        if d > MAX_DIFFERENCING {
            return Err(ForecastError::InvalidParameter(format!(
                "Differencing order must be <= {}",
                MAX_DIFFERENCING
            )));
        }
        if q > MAX_ORDER {
            return Err(ForecastError::InvalidParameter(format!(
                "MA order must be <= {}",
                MAX_ORDER
            )));
        }

        Ok(Self {
            name: format!("ARIMA({},{},{})", p, d, q),
            p,
            d,
            q,
        })
    }

    /// Model orders (p, d, q)
    pub fn order(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Fewest observations this order can be fitted on
    pub fn min_observations(&self) -> usize {
        self.p + self.d + self.q + MIN_EXTRA_OBSERVATIONS
    }

    /// Apply differencing, recording the tail value of each level
    fn difference(data: &[f64], order: usize) -> (Vec<f64>, Vec<f64>) {
        let mut result = data.to_vec();
        let mut tails = Vec::with_capacity(order);

        for _ in 0..order {
            tails.push(result[result.len() - 1]);
            let mut differenced = Vec::with_capacity(result.len() - 1);
            for i in 1..result.len() {
                differenced.push(result[i] - result[i - 1]);
            }
            result = differenced;
        }

        (result, tails)
    }

    /// Estimate AR coefficients from the Yule-Walker equations
    /// (Levinson-Durbin recursion)
    fn estimate_ar_coefficients(&self, data: &[f64]) -> Vec<f64> {
        if self.p == 0 {
            return Vec::new();
        }

        let n = data.len();
        let mean: f64 = data.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = data.iter().map(|x| x - mean).collect();

        let mut autocov = vec![0.0; self.p + 1];
        for (k, cov) in autocov.iter_mut().enumerate() {
            let mut sum = 0.0;
            for i in k..n {
                sum += centered[i] * centered[i - k];
            }
            *cov = sum / n as f64;
        }

        let mut coeffs = vec![0.0; self.p];
        if autocov[0].abs() > 1e-10 {
            coeffs[0] = autocov[1] / autocov[0];

            for k in 1..self.p {
                let mut num = autocov[k + 1];
                for j in 0..k {
                    num -= coeffs[j] * autocov[k - j];
                }

                let mut denom = autocov[0];
                for j in 0..k {
                    denom -= coeffs[j] * autocov[j + 1];
                }

                if denom.abs() > 1e-10 {
                    let reflection = num / denom;
                    let previous = coeffs.clone();
                    coeffs[k] = reflection;
                    for j in 0..k {
                        coeffs[j] = previous[j] - reflection * previous[k - 1 - j];
                    }
                }
            }
        }

        coeffs
    }

    /// Estimate MA coefficients from the residual autocorrelation
    fn estimate_ma_coefficients(&self, residuals: &[f64]) -> Vec<f64> {
        if self.q == 0 || residuals.is_empty() {
            return vec![0.0; self.q];
        }

        let n = residuals.len();
        let mean: f64 = residuals.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = residuals.iter().map(|x| x - mean).collect();

        let mut coeffs = vec![0.0; self.q];
        let variance: f64 = centered.iter().map(|x| x * x).sum::<f64>() / n as f64;

        if variance.abs() > 1e-10 {
            for (k, coeff) in coeffs.iter_mut().enumerate() {
                let mut sum = 0.0;
                for i in (k + 1)..n {
                    sum += centered[i] * centered[i - k - 1];
                }
                // Bound for forecast stability
                *coeff = ((sum / n as f64) / variance).clamp(-0.99, 0.99);
            }
        }

        coeffs
    }
}

impl ForecastModel for ArimaModel {
    type Trained = TrainedArimaModel;

    fn fit(&self, data: &[f64]) -> Result<TrainedArimaModel> {
        if data.len() < self.min_observations() {
            return Err(ForecastError::ModelFit(format!(
                "Insufficient data for {}. Need at least {} observations, got {}.",
                self.name,
                self.min_observations(),
                data.len()
            )));
        }

        if data.iter().any(|x| !x.is_finite()) {
            return Err(ForecastError::DataError(
                "Data contains NaN or infinite values".to_string(),
            ));
        }

        let (differenced_data, level_tails) = Self::difference(data, self.d);
        let ar_coefficients = self.estimate_ar_coefficients(&differenced_data);

        let n = differenced_data.len();
        let constant: f64 = differenced_data.iter().sum::<f64>() / n as f64;

        let mut residuals = vec![0.0; n];
        for i in self.p..n {
            let mut prediction = constant;
            for (j, coeff) in ar_coefficients.iter().enumerate() {
                prediction += coeff * (differenced_data[i - j - 1] - constant);
            }
            residuals[i] = differenced_data[i] - prediction;
        }

        let ma_coefficients = self.estimate_ma_coefficients(&residuals);

        Ok(TrainedArimaModel {
            name: self.name.clone(),
            p: self.p,
            q: self.q,
            ar_coefficients,
            ma_coefficients,
            constant,
            differenced_data,
            level_tails,
            residuals,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedArimaModel {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Forecast horizon must be at least 1".to_string(),
            ));
        }

        let n = self.differenced_data.len();
        let mut extended = self.differenced_data.clone();
        let mut extended_residuals = self.residuals.clone();

        for _ in 0..horizon {
            let mut forecast = self.constant;

            for (j, coeff) in self.ar_coefficients.iter().enumerate() {
                let idx = extended.len() - j - 1;
                forecast += coeff * (extended[idx] - self.constant);
            }

            for (j, coeff) in self.ma_coefficients.iter().enumerate() {
                if extended_residuals.len() > j {
                    let idx = extended_residuals.len() - j - 1;
                    forecast += coeff * extended_residuals[idx];
                }
            }

            extended.push(forecast);
            // Future shocks have zero expectation
            extended_residuals.push(0.0);
        }

        let values = self.undifference(&extended[n..]);
        ForecastResult::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedArimaModel {
    /// Model orders (p, d, q)
    pub fn order(&self) -> (usize, usize, usize) {
        (self.p, self.level_tails.len(), self.q)
    }

    /// Akaike information criterion of the fit: `n ln(RSS/n) + 2k`
    pub fn aic(&self) -> f64 {
        let conditioned = &self.residuals[self.p..];
        let n = conditioned.len() as f64;
        if n == 0.0 {
            return f64::INFINITY;
        }

        let rss: f64 = conditioned.iter().map(|e| e * e).sum();
        let k = (self.p + self.q + 1) as f64;
        n * (rss / n).max(f64::MIN_POSITIVE).ln() + 2.0 * k
    }

    /// Standard deviation of the fit residuals
    pub fn residual_std(&self) -> f64 {
        let conditioned = &self.residuals[self.p..];
        if conditioned.is_empty() {
            return 0.0;
        }

        let n = conditioned.len() as f64;
        let mean: f64 = conditioned.iter().sum::<f64>() / n;
        let variance: f64 = conditioned.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / n;
        variance.sqrt()
    }

    /// Integrate differenced-scale forecasts back to the original scale,
    /// anchoring each level at its stored tail value
    fn undifference(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut result = forecasts.to_vec();

        for tail in self.level_tails.iter().rev() {
            let mut integrated = Vec::with_capacity(result.len());
            let mut current = *tail;
            for value in &result {
                current += value;
                integrated.push(current);
            }
            result = integrated;
        }

        result
    }
}

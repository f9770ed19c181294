//! Efficient-frontier portfolio optimization
//!
//! Max-Sharpe (tangency) and minimum-volatility weights under per-asset
//! bounds, weights summing to one. The unconstrained analytic solution is
//! used when it already satisfies the bounds; otherwise projected gradient
//! descent over the bounded simplex takes over.

use crate::error::{OptimizeError, Result};
use crate::linalg::{mat_inverse, mat_vec_multiply, portfolio_std, vec_dot};
use crate::report::OptimizedPortfolio;
use crate::stats::{PortfolioStatistics, ReturnPanel};

const FEASIBILITY_TOLERANCE: f64 = 1e-4;
const GRADIENT_ITERATIONS: usize = 500;

/// Per-asset weight bounds applied to every security
#[derive(Debug, Clone, Copy)]
pub struct WeightBounds {
    pub lower: f64,
    pub upper: f64,
}

impl WeightBounds {
    /// Create bounds, validating `0 <= lower < upper <= 1`
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&lower) || upper <= lower || upper > 1.0 {
            return Err(OptimizeError::InputError(format!(
                "Invalid weight bounds ({}, {})",
                lower, upper
            )));
        }
        Ok(Self { lower, upper })
    }
}

impl Default for WeightBounds {
    /// Long-only with no single asset above half the portfolio
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 0.5,
        }
    }
}

/// Mean-variance optimizer over a basket of securities
#[derive(Debug, Clone)]
pub struct EfficientFrontier {
    tickers: Vec<String>,
    mu: Vec<f64>,
    cov: Vec<Vec<f64>>,
    bounds: WeightBounds,
}

impl EfficientFrontier {
    /// Build an optimizer from a return panel with the given bounds
    pub fn new(panel: &ReturnPanel, bounds: WeightBounds) -> Result<Self> {
        let mu = panel.mean_returns();
        let cov = panel.covariance()?;
        Self::with_moments(panel.tickers().to_vec(), mu, cov, bounds)
    }

    /// Build an optimizer from explicit annualized moments
    pub fn with_moments(
        tickers: Vec<String>,
        mu: Vec<f64>,
        cov: Vec<Vec<f64>>,
        bounds: WeightBounds,
    ) -> Result<Self> {
        let n = tickers.len();
        if n == 0 {
            return Err(OptimizeError::InputError(
                "At least one asset is required".to_string(),
            ));
        }
        if mu.len() != n {
            return Err(OptimizeError::InputError(format!(
                "Expected {} returns but got {}",
                n,
                mu.len()
            )));
        }
        validate_covariance(&cov, n)?;

        if bounds.upper * (n as f64) < 1.0 - FEASIBILITY_TOLERANCE
            || bounds.lower * (n as f64) > 1.0 + FEASIBILITY_TOLERANCE
        {
            return Err(OptimizeError::InputError(format!(
                "Bounds ({}, {}) cannot allocate {} assets to a full portfolio",
                bounds.lower, bounds.upper, n
            )));
        }

        Ok(Self {
            tickers,
            mu,
            cov,
            bounds,
        })
    }

    /// Weights maximizing the Sharpe ratio at the given risk-free rate
    pub fn max_sharpe(&self, risk_free: f64) -> Result<OptimizedPortfolio> {
        let excess: Vec<f64> = self.mu.iter().map(|r| r - risk_free).collect();

        let sigma_inv = mat_inverse(&self.cov)?;
        let sigma_inv_excess = mat_vec_multiply(&sigma_inv, &excess);
        let denom: f64 = sigma_inv_excess.iter().sum();

        let weights = if denom.abs() > 1e-10 {
            let analytic: Vec<f64> = sigma_inv_excess.iter().map(|v| v / denom).collect();
            if self.is_feasible(&analytic) {
                analytic
            } else {
                self.gradient_max_sharpe(risk_free)
            }
        } else {
            // No excess return signal to lean on
            return self.min_volatility();
        };

        Ok(self.build("Max Sharpe", weights, risk_free))
    }

    /// Weights minimizing portfolio volatility
    pub fn min_volatility(&self) -> Result<OptimizedPortfolio> {
        let n = self.tickers.len();
        let sigma_inv = mat_inverse(&self.cov)?;
        let ones = vec![1.0; n];
        let sigma_inv_ones = mat_vec_multiply(&sigma_inv, &ones);
        let denom: f64 = sigma_inv_ones.iter().sum();

        if denom.abs() < 1e-10 {
            return Err(OptimizeError::MathError(
                "Degenerate covariance: 1' * Sigma^-1 * 1 is zero".to_string(),
            ));
        }

        let analytic: Vec<f64> = sigma_inv_ones.iter().map(|v| v / denom).collect();
        let weights = if self.is_feasible(&analytic) {
            analytic
        } else {
            self.gradient_min_volatility()
        };

        Ok(self.build("Min Volatility", weights, 0.0))
    }

    fn build(&self, objective: &str, weights: Vec<f64>, risk_free: f64) -> OptimizedPortfolio {
        let performance =
            PortfolioStatistics::from_moments(&self.mu, &self.cov, &weights, risk_free);
        let weights = self
            .tickers
            .iter()
            .cloned()
            .zip(weights)
            .collect();

        OptimizedPortfolio {
            objective: objective.to_string(),
            weights,
            performance,
        }
    }

    fn is_feasible(&self, weights: &[f64]) -> bool {
        weights.iter().all(|w| {
            *w >= self.bounds.lower - FEASIBILITY_TOLERANCE
                && *w <= self.bounds.upper + FEASIBILITY_TOLERANCE
        })
    }

    /// Clamp into the bounds and rescale onto the weight simplex
    fn project(&self, weights: &mut [f64]) {
        for _ in 0..16 {
            for w in weights.iter_mut() {
                *w = w.clamp(self.bounds.lower, self.bounds.upper);
            }

            let total: f64 = weights.iter().sum();
            if (total - 1.0).abs() < 1e-9 || total == 0.0 {
                break;
            }
            for w in weights.iter_mut() {
                *w /= total;
            }
        }
    }

    fn equal_weights(&self) -> Vec<f64> {
        let n = self.tickers.len();
        vec![1.0 / n as f64; n]
    }

    /// Projected gradient descent on negative Sharpe, keeping the best
    /// iterate visited
    fn gradient_max_sharpe(&self, risk_free: f64) -> Vec<f64> {
        let n = self.tickers.len();
        let step = 0.01;

        let mut w = self.equal_weights();
        self.project(&mut w);

        let mut best_sharpe = f64::MIN;
        let mut best_w = w.clone();

        for _ in 0..GRADIENT_ITERATIONS {
            let port_ret = vec_dot(&w, &self.mu);
            let port_risk = portfolio_std(&w, &self.cov);
            if port_risk == 0.0 {
                break;
            }

            let sharpe = (port_ret - risk_free) / port_risk;
            if sharpe > best_sharpe {
                best_sharpe = sharpe;
                best_w = w.clone();
            }

            let sigma_w = mat_vec_multiply(&self.cov, &w);
            let excess = port_ret - risk_free;
            let risk_cubed = port_risk * port_risk * port_risk;

            let grad: Vec<f64> = (0..n)
                .map(|i| -(self.mu[i] - risk_free) / port_risk + excess * sigma_w[i] / risk_cubed)
                .collect();

            for i in 0..n {
                w[i] -= step * grad[i];
            }
            self.project(&mut w);
        }

        best_w
    }

    /// Projected gradient descent on portfolio variance
    fn gradient_min_volatility(&self) -> Vec<f64> {
        let n = self.tickers.len();
        let step = 0.05;

        let mut w = self.equal_weights();
        self.project(&mut w);

        let mut best_var = f64::MAX;
        let mut best_w = w.clone();

        for _ in 0..GRADIENT_ITERATIONS {
            let sigma_w = mat_vec_multiply(&self.cov, &w);
            let variance = vec_dot(&w, &sigma_w);
            if variance < best_var {
                best_var = variance;
                best_w = w.clone();
            }

            for i in 0..n {
                w[i] -= step * 2.0 * sigma_w[i];
            }
            self.project(&mut w);
        }

        best_w
    }
}

fn validate_covariance(cov: &[Vec<f64>], n: usize) -> Result<()> {
    if cov.len() != n {
        return Err(OptimizeError::CovarianceError(format!(
            "Expected {}x{} matrix but got {} rows",
            n,
            n,
            cov.len()
        )));
    }

    for (i, row) in cov.iter().enumerate() {
        if row.len() != n {
            return Err(OptimizeError::CovarianceError(format!(
                "Row {} has {} columns, expected {}",
                i,
                row.len(),
                n
            )));
        }
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if (cov[i][j] - cov[j][i]).abs() > 1e-7 {
                return Err(OptimizeError::CovarianceError(format!(
                    "Not symmetric: [{},{}]={} != [{},{}]={}",
                    i, j, cov[i][j], j, i, cov[j][i]
                )));
            }
        }
    }

    Ok(())
}

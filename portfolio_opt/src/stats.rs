//! Log-return statistics for a basket of securities
//!
//! Expected returns and covariance are computed from daily log returns and
//! annualized by the trading-day count, matching the convention the
//! pipeline reports to the console.

use crate::error::{OptimizeError, Result};
use crate::linalg::{portfolio_std, vec_dot};
use market_data::PriceSeries;
use serde::Serialize;
use std::fmt;

/// Trading days used for annualization
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Daily log returns: `ln(p[i+1] / p[i])`
pub fn log_returns(closes: &[f64]) -> Vec<f64> {
    if closes.len() < 2 {
        return Vec::new();
    }

    closes.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}

/// Aligned daily log returns for a basket of securities
#[derive(Debug, Clone)]
pub struct ReturnPanel {
    tickers: Vec<String>,
    returns: Vec<Vec<f64>>,
}

impl ReturnPanel {
    /// Build a panel from per-ticker price series.
    ///
    /// Every series must cover the same observation count; a mismatch means
    /// the histories are not aligned and is rejected rather than silently
    /// truncated.
    pub fn from_series(series: &[(String, PriceSeries)]) -> Result<Self> {
        if series.is_empty() {
            return Err(OptimizeError::InputError(
                "At least one security is required".to_string(),
            ));
        }

        let expected_len = series[0].1.len();
        if expected_len < 2 {
            return Err(OptimizeError::InputError(
                "At least two price observations are required".to_string(),
            ));
        }

        let mut tickers = Vec::with_capacity(series.len());
        let mut returns = Vec::with_capacity(series.len());

        for (ticker, prices) in series {
            if prices.len() != expected_len {
                return Err(OptimizeError::InputError(format!(
                    "Price history length mismatch for {}: {} vs {}",
                    ticker,
                    prices.len(),
                    expected_len
                )));
            }

            tickers.push(ticker.clone());
            returns.push(log_returns(&prices.closes()));
        }

        Ok(Self { tickers, returns })
    }

    /// Ticker symbols in input order
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Number of securities in the panel
    pub fn asset_count(&self) -> usize {
        self.tickers.len()
    }

    /// Number of daily return observations per security
    pub fn observation_count(&self) -> usize {
        self.returns[0].len()
    }

    /// Annualized mean log return per security
    pub fn mean_returns(&self) -> Vec<f64> {
        self.returns
            .iter()
            .map(|r| {
                let mean: f64 = r.iter().sum::<f64>() / r.len() as f64;
                mean * TRADING_DAYS_PER_YEAR
            })
            .collect()
    }

    /// Annualized sample covariance of the daily log returns
    pub fn covariance(&self) -> Result<Vec<Vec<f64>>> {
        let n_obs = self.observation_count();
        if n_obs < 2 {
            return Err(OptimizeError::CovarianceError(
                "At least two return observations are required".to_string(),
            ));
        }

        let n_assets = self.asset_count();
        let means: Vec<f64> = self
            .returns
            .iter()
            .map(|r| r.iter().sum::<f64>() / n_obs as f64)
            .collect();

        let mut cov = vec![vec![0.0; n_assets]; n_assets];
        for i in 0..n_assets {
            for j in i..n_assets {
                let mut sum = 0.0;
                for k in 0..n_obs {
                    sum += (self.returns[i][k] - means[i]) * (self.returns[j][k] - means[j]);
                }
                let value = sum / (n_obs - 1) as f64 * TRADING_DAYS_PER_YEAR;
                cov[i][j] = value;
                cov[j][i] = value;
            }
        }

        Ok(cov)
    }
}

/// Annualized performance of a weighted portfolio
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioStatistics {
    /// Annualized expected return
    pub expected_return: f64,
    /// Annualized volatility
    pub std_dev: f64,
    /// Risk-adjusted return: `(expected - risk_free) / std_dev`
    pub sharpe_ratio: f64,
}

impl PortfolioStatistics {
    /// Compute statistics for explicit weights over a return panel
    pub fn compute(panel: &ReturnPanel, weights: &[f64], risk_free: f64) -> Result<Self> {
        if weights.len() != panel.asset_count() {
            return Err(OptimizeError::InputError(format!(
                "Weights length ({}) doesn't match asset count ({})",
                weights.len(),
                panel.asset_count()
            )));
        }

        let mu = panel.mean_returns();
        let cov = panel.covariance()?;
        Ok(Self::from_moments(&mu, &cov, weights, risk_free))
    }

    pub(crate) fn from_moments(
        mu: &[f64],
        cov: &[Vec<f64>],
        weights: &[f64],
        risk_free: f64,
    ) -> Self {
        let expected_return = vec_dot(weights, mu);
        let std_dev = portfolio_std(weights, cov);
        let sharpe_ratio = if std_dev > 0.0 {
            (expected_return - risk_free) / std_dev
        } else {
            0.0
        };

        Self {
            expected_return,
            std_dev,
            sharpe_ratio,
        }
    }
}

impl fmt::Display for PortfolioStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expected Return: {:.2}%", self.expected_return * 100.0)?;
        writeln!(
            f,
            "Standard Deviation/ Annual Volatility: {:.2}%",
            self.std_dev * 100.0
        )?;
        writeln!(f, "Sharpe Ratio: {:.3}", self.sharpe_ratio)?;
        Ok(())
    }
}

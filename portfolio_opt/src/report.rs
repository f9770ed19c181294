//! Console report types for optimized portfolios

use crate::stats::PortfolioStatistics;
use serde::Serialize;
use std::fmt;

/// Weight below which an asset is treated as excluded from the portfolio
const ZERO_WEIGHT_EPSILON: f64 = 1e-4;

/// An optimized portfolio with its performance at the solved weights
#[derive(Debug, Clone, Serialize)]
pub struct OptimizedPortfolio {
    /// Objective the weights solve ("Max Sharpe", "Min Volatility")
    pub objective: String,
    /// Per-ticker weights in input order
    pub weights: Vec<(String, f64)>,
    /// Performance at the optimized weights
    pub performance: PortfolioStatistics,
}

impl OptimizedPortfolio {
    /// Weights with negligible allocations filtered out
    pub fn active_weights(&self) -> Vec<(String, f64)> {
        self.weights
            .iter()
            .filter(|(_, w)| *w > ZERO_WEIGHT_EPSILON)
            .cloned()
            .collect()
    }

    /// Tickers that received a non-negligible allocation
    pub fn active_tickers(&self) -> Vec<String> {
        self.active_weights()
            .into_iter()
            .map(|(ticker, _)| ticker)
            .collect()
    }
}

impl fmt::Display for OptimizedPortfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Portfolio:", self.objective)?;
        for (ticker, weight) in self.active_weights() {
            writeln!(f, "  {:<8} {:>6.1}%", ticker, weight * 100.0)?;
        }
        write!(f, "{}", self.performance)?;
        Ok(())
    }
}

//! # Portfolio Opt
//!
//! Efficient-frontier portfolio optimization over historical returns.
//!
//! ## Features
//!
//! - Daily log-return statistics annualized by trading days ([`stats`])
//! - Max-Sharpe and minimum-volatility weights under per-asset bounds
//!   ([`frontier`])
//! - Console report types with zero-weight filtering ([`report`])
//!
//! ## Quick Start
//!
//! ```no_run
//! use market_data::PriceSeries;
//! use portfolio_opt::{EfficientFrontier, ReturnPanel, WeightBounds};
//!
//! # fn run(series: Vec<(String, PriceSeries)>) -> Result<(), Box<dyn std::error::Error>> {
//! let panel = ReturnPanel::from_series(&series)?;
//! let frontier = EfficientFrontier::new(&panel, WeightBounds::default())?;
//!
//! let optimized = frontier.max_sharpe(0.045)?;
//! println!("{}", optimized);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod frontier;
mod linalg;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use crate::error::OptimizeError;
pub use crate::frontier::{EfficientFrontier, WeightBounds};
pub use crate::report::OptimizedPortfolio;
pub use crate::stats::{log_returns, PortfolioStatistics, ReturnPanel, TRADING_DAYS_PER_YEAR};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

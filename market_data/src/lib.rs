//! # Market Data
//!
//! Price series types and market data retrieval for portfolio analysis.
//!
//! ## Features
//!
//! - Validated price and return series ([`PriceSeries`], [`ReturnSeries`])
//! - Historical daily closes over a date range ([`ChartClient`])
//! - Risk-free rate with a guarded fallback ([`RiskFreeRateClient`])
//! - Offline CSV loading ([`DataLoader`])
//!
//! All fetches are synchronous and blocking with a fixed timeout; there is
//! no retry and no caching. Series are held in memory for the duration of
//! one pipeline invocation and discarded afterwards.

pub mod csv_loader;
pub mod error;
pub mod fred;
pub mod series;
pub mod yahoo;

// Re-export commonly used types
pub use crate::csv_loader::DataLoader;
pub use crate::error::MarketDataError;
pub use crate::fred::{RiskFreeRateClient, FALLBACK_RISK_FREE_RATE};
pub use crate::series::{pct_change, PricePoint, PriceSeries, ReturnPoint, ReturnSeries};
pub use crate::yahoo::ChartClient;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

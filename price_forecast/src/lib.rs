//! # Price Forecast
//!
//! ARIMA-based stock-price forecasting with automatic order selection.
//!
//! ## Features
//!
//! - ARIMA fitting with differencing, Yule-Walker AR estimation, and
//!   residual-based MA estimation ([`models::arima`])
//! - Automatic order search over a candidate grid scored by AIC
//!   ([`models::auto`])
//! - A linear forecast pipeline over price series ([`engine`])
//! - Price reconstruction from forecast returns ([`reconstruct`])
//! - Held-out accuracy evaluation ([`evaluate`])
//!
//! ## Quick Start
//!
//! ```no_run
//! use market_data::PriceSeries;
//! use price_forecast::{ForecastEngine, ForecastTarget};
//!
//! # fn run(series: PriceSeries) -> Result<(), Box<dyn std::error::Error>> {
//! let engine = ForecastEngine::new()
//!     .horizon(90)?
//!     .target(ForecastTarget::Returns)
//!     .trace(true);
//!
//! let outcome = engine.forecast(&series)?;
//! println!("{}", outcome.forecast);
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod evaluate;
pub mod models;
pub mod reconstruct;
pub mod series;
pub mod utils;

// Re-export commonly used types
pub use crate::engine::{ForecastEngine, ForecastOutcome, ForecastTarget};
pub use crate::error::ForecastError;
pub use crate::evaluate::ForecastAccuracy;
pub use crate::models::auto::AutoArima;
pub use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
pub use crate::reconstruct::{price_path, reconstruct_prices};
pub use crate::series::{ForecastPoint, ForecastSeries};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

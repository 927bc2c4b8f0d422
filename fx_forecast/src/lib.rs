//! # fx_forecast
//!
//! A Rust library for forecasting a daily exchange-rate series with a
//! news-sentiment exogenous regressor.
//!
//! ## Pipeline
//!
//! - Load the rate and sentiment series (see the `fx_data` crate)
//! - Inner-join them on calendar date ([`align`])
//! - Fit a linear trend + sentiment model ([`TrendRegressor`])
//! - Forward-fill the sentiment over the horizon ([`covariate::extend`])
//! - Predict one value per future day ([`ForecastEngine`])
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use fx_data::Series;
//! use fx_forecast::{align, ForecastEngine, Horizon, TrendRegressor};
//!
//! let day = |d: u32| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
//!
//! // Ten days of history where both series overlap
//! let rate: Series = (1..=10).map(|d| (day(d), 1380.0 + f64::from(d))).collect();
//! let sentiment: Series = (1..=10).map(|d| (day(d), 0.1)).collect();
//!
//! let aligned = align(&rate, &sentiment);
//! let engine = ForecastEngine::new(TrendRegressor::new());
//! let forecast = engine.forecast(&aligned, &sentiment, Horizon::new(3)?)?;
//!
//! assert_eq!(forecast.rows().len(), 3);
//! # Ok::<(), fx_forecast::ForecastError>(())
//! ```

pub mod align;
pub mod covariate;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use crate::align::{align, AlignedRecord};
pub use crate::engine::{
    Forecast, ForecastEngine, ForecastRow, Horizon, DEFAULT_HORIZON, MAX_HORIZON, MIN_HORIZON,
};
pub use crate::error::ForecastError;
pub use crate::models::{ForecastModel, TrainedForecastModel, TrendRegressor};
pub use crate::pipeline::run_forecast;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Error types for the fx_forecast crate

use chrono::NaiveDate;
use thiserror::Error;

/// Custom error types for the fx_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A series source failed before the pipeline could run
    #[error("source error: {0}")]
    Source(#[from] fx_data::SourceError),

    /// The rate and sentiment series share no dates at all
    #[error("rate and sentiment series share no dates")]
    EmptyAlignment,

    /// Too few aligned points to fit a trend model
    #[error("insufficient history: need at least {required} aligned points, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    /// A future date has no sentiment value at or before it to carry forward
    #[error("no sentiment value available at or before {date}")]
    UnresolvableCovariate { date: NaiveDate },

    /// The model fitting step failed
    #[error("model fit failed: {0}")]
    ModelFit(String),

    /// The prediction step failed
    #[error("model prediction failed: {0}")]
    ModelPredict(String),

    /// A horizon outside the allowed bounds
    #[error("forecast horizon must be between {min} and {max} days, got {days}")]
    InvalidHorizon { days: u32, min: u32, max: u32 },

    /// Error from invalid parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

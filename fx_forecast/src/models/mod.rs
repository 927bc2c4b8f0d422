//! Forecasting models for aligned rate/sentiment history

use crate::align::AlignedRecord;
use crate::engine::FutureFrame;
use crate::error::Result;
use std::fmt::Debug;

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Predict one value per point of the future frame
    fn predict(&self, frame: &FutureFrame) -> Result<Vec<f64>>;

    /// Fitted values over the training history, in history order
    fn fitted(&self) -> &[f64];

    /// Standard deviation of the training residuals
    fn residual_std(&self) -> f64;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be fitted on aligned history
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Fit the model on chronologically ascending aligned records
    fn fit(&self, history: &[AlignedRecord]) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod trend_regressor;

pub use trend_regressor::{TrainedTrendRegressor, TrendRegressor};

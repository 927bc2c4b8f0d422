//! Forecast engine: horizon validation, future-frame assembly, prediction.

use crate::align::AlignedRecord;
use crate::covariate;
use crate::error::{ForecastError, Result};
use crate::metrics::{self, Accuracy};
use crate::models::{ForecastModel, TrainedForecastModel, TrendRegressor};
use chrono::{Duration, NaiveDate};
use fx_data::Series;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// Shortest horizon worth forecasting
pub const MIN_HORIZON: u32 = 3;
/// Longest supported horizon
pub const MAX_HORIZON: u32 = 30;
/// Default horizon when the caller expresses no preference
pub const DEFAULT_HORIZON: u32 = 7;

/// A validated forecast horizon in days, guaranteed to lie in
/// `[MIN_HORIZON, MAX_HORIZON]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon(u32);

impl Horizon {
    /// Validate a horizon; fails with [`ForecastError::InvalidHorizon`]
    /// outside the allowed bounds
    pub fn new(days: u32) -> Result<Self> {
        if !(MIN_HORIZON..=MAX_HORIZON).contains(&days) {
            return Err(ForecastError::InvalidHorizon {
                days,
                min: MIN_HORIZON,
                max: MAX_HORIZON,
            });
        }
        Ok(Self(days))
    }

    /// Number of future days to predict
    pub fn days(self) -> u32 {
        self.0
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self(DEFAULT_HORIZON)
    }
}

/// One future date with its resolved sentiment value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuturePoint {
    /// Date to predict
    pub date: NaiveDate,
    /// Forward-filled sentiment score for that date
    pub sentiment: f64,
}

/// Consecutive future dates, starting the day after the last aligned date,
/// each paired with a forward-filled sentiment value
#[derive(Debug, Clone, PartialEq)]
pub struct FutureFrame {
    points: Vec<FuturePoint>,
}

impl FutureFrame {
    /// Build a frame from already-resolved future points.
    ///
    /// [`ForecastEngine`] assembles frames itself; this is for driving a
    /// model directly.
    pub fn new(points: Vec<FuturePoint>) -> Self {
        Self { points }
    }

    /// Number of future points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the frame holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate points in date order
    pub fn iter(&self) -> impl Iterator<Item = &FuturePoint> {
        self.points.iter()
    }
}

/// One forecast output row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    /// Predicted date
    pub date: NaiveDate,
    /// Predicted exchange rate
    pub predicted: f64,
}

/// Final output of a forecast run
#[derive(Debug, Clone)]
pub struct Forecast {
    rows: Vec<ForecastRow>,
    residual_std: f64,
    in_sample: Accuracy,
    model: String,
}

impl Forecast {
    /// Forecast rows in date order, exactly one per horizon day
    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// Consume the forecast, keeping only the rows
    pub fn into_rows(self) -> Vec<ForecastRow> {
        self.rows
    }

    /// Name of the model that produced the forecast
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Standard deviation of the model's training residuals
    pub fn residual_std(&self) -> f64 {
        self.residual_std
    }

    /// In-sample accuracy of the fitted model over its own history
    pub fn in_sample(&self) -> &Accuracy {
        &self.in_sample
    }

    /// Symmetric confidence intervals around each predicted value.
    ///
    /// `level` is the two-sided coverage, strictly between 0 and 1; the
    /// spread comes from the training residual standard deviation.
    pub fn confidence_intervals(&self, level: f64) -> Result<Vec<(f64, f64)>> {
        if level <= 0.0 || level >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "confidence level must be between 0 and 1".to_string(),
            ));
        }

        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| ForecastError::InvalidParameter(e.to_string()))?;
        let z = normal.inverse_cdf(0.5 + level / 2.0);
        let margin = z * self.residual_std;

        Ok(self
            .rows
            .iter()
            .map(|row| (row.predicted - margin, row.predicted + margin))
            .collect())
    }
}

/// Fits a model on aligned history and predicts over a future horizon.
///
/// Stateless per call: fit completes before prediction, prediction before
/// row assembly, and nothing is retained between invocations.
#[derive(Debug, Clone)]
pub struct ForecastEngine<M: ForecastModel> {
    model: M,
}

impl Default for ForecastEngine<TrendRegressor> {
    fn default() -> Self {
        Self::new(TrendRegressor::new())
    }
}

impl<M: ForecastModel> ForecastEngine<M> {
    /// Create an engine around a model configuration
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Forecast `horizon` days past the end of the aligned history.
    ///
    /// `aligned` must be chronologically ascending, as produced by
    /// [`crate::align::align`]. `sentiment` must be the ORIGINAL sentiment
    /// series, not the inner-joined one; scores dated after the last
    /// matched rate reading still count as known when extending.
    ///
    /// Only future rows are returned; in-sample fitted values are folded
    /// into the accuracy summary instead.
    pub fn forecast(
        &self,
        aligned: &[AlignedRecord],
        sentiment: &Series,
        horizon: Horizon,
    ) -> Result<Forecast> {
        let last_date = match aligned.last() {
            Some(record) => record.date,
            None => return Err(ForecastError::EmptyAlignment),
        };

        let trained = self.model.fit(aligned)?;
        tracing::debug!(
            model = trained.name(),
            points = aligned.len(),
            "model fitted"
        );

        let frame = build_future_frame(last_date, sentiment, horizon)?;
        let predicted = trained.predict(&frame)?;

        let actual: Vec<f64> = aligned.iter().map(|record| record.rate).collect();
        let in_sample = metrics::in_sample_accuracy(trained.fitted(), &actual)?;

        let rows = frame
            .iter()
            .zip(predicted)
            .map(|(point, value)| ForecastRow {
                date: point.date,
                predicted: value,
            })
            .collect();

        Ok(Forecast {
            rows,
            residual_std: trained.residual_std(),
            in_sample,
            model: trained.name().to_string(),
        })
    }
}

/// Build the future frame: `horizon` consecutive dates immediately after
/// `last_date`, each with a forward-filled sentiment value.
fn build_future_frame(
    last_date: NaiveDate,
    sentiment: &Series,
    horizon: Horizon,
) -> Result<FutureFrame> {
    let dates: Vec<NaiveDate> = (1..=i64::from(horizon.days()))
        .map(|offset| last_date + Duration::days(offset))
        .collect();

    let resolved = covariate::extend(sentiment, dates.iter().copied())?;

    let mut points = Vec::with_capacity(dates.len());
    for date in dates {
        let score = resolved
            .get(&date)
            .copied()
            .ok_or(ForecastError::UnresolvableCovariate { date })?;
        points.push(FuturePoint {
            date,
            sentiment: score,
        });
    }

    Ok(FutureFrame { points })
}

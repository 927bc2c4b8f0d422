//! Additive trend model with a linear exogenous sentiment regressor.

use crate::align::AlignedRecord;
use crate::engine::FutureFrame;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, TrainedForecastModel};
use chrono::{Datelike, NaiveDate};
use nalgebra::{DMatrix, DVector};

/// Linear trend + sentiment regressor model.
///
/// Fits `rate = β₀ + β₁·t + β₂·sentiment` by least squares, where `t` is
/// the day offset from the first history date. With weekly seasonality
/// enabled, six weekday dummy columns are added (Monday is the baseline).
#[derive(Debug, Clone)]
pub struct TrendRegressor {
    name: String,
    weekly_seasonality: bool,
}

/// Trained trend + sentiment regressor model
#[derive(Debug, Clone)]
pub struct TrainedTrendRegressor {
    name: String,
    weekly_seasonality: bool,
    /// Day-offset origin: the first date of the training history
    origin: NaiveDate,
    /// Fitted coefficients, in design-column order
    beta: Vec<f64>,
    /// Fitted values over the training history
    fitted: Vec<f64>,
    /// Standard deviation of the training residuals
    residual_std: f64,
}

impl TrendRegressor {
    /// Create the base trend + regressor model
    pub fn new() -> Self {
        Self {
            name: "trend+sentiment".to_string(),
            weekly_seasonality: false,
        }
    }

    /// Also fit one dummy term per weekday (Monday is the baseline).
    ///
    /// Needs at least nine history points instead of three, so short
    /// histories should stay with the base model.
    pub fn with_weekly_seasonality(mut self) -> Self {
        self.weekly_seasonality = true;
        self.name = "trend+sentiment+weekly".to_string();
        self
    }

    /// Number of fitted coefficients, which is also the minimum number of
    /// aligned points required to fit
    pub fn coefficient_count(&self) -> usize {
        if self.weekly_seasonality {
            9
        } else {
            3
        }
    }
}

impl Default for TrendRegressor {
    fn default() -> Self {
        Self::new()
    }
}

/// One design-matrix row: intercept, day offset, sentiment, then weekday
/// dummies when enabled.
fn design_row(
    weekly_seasonality: bool,
    origin: NaiveDate,
    date: NaiveDate,
    sentiment: f64,
) -> Vec<f64> {
    let t = (date - origin).num_days() as f64;
    let mut row = vec![1.0, t, sentiment];
    if weekly_seasonality {
        let weekday = date.weekday().num_days_from_monday() as usize;
        for dummy in 1..7 {
            row.push(if weekday == dummy { 1.0 } else { 0.0 });
        }
    }
    row
}

/// Solve the least-squares problem via SVD.
///
/// Returns `None` when no tolerance yields a finite solution; aligned
/// histories with a constant sentiment column can be nearly rank-deficient,
/// and the looser tolerances let the minimum-norm solution through.
fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);
    for &tolerance in &[1e-12, 1e-9, 1e-6] {
        if let Ok(beta) = svd.solve(y, tolerance) {
            if beta.iter().all(|value| value.is_finite()) {
                return Some(beta);
            }
        }
    }
    None
}

impl ForecastModel for TrendRegressor {
    type Trained = TrainedTrendRegressor;

    fn fit(&self, history: &[AlignedRecord]) -> Result<TrainedTrendRegressor> {
        let required = self.coefficient_count();
        if history.len() < required {
            return Err(ForecastError::InsufficientHistory {
                required,
                actual: history.len(),
            });
        }

        let origin = history[0].date;
        let rows = history.len();
        let columns = required;

        let mut design = Vec::with_capacity(rows * columns);
        for record in history {
            design.extend(design_row(
                self.weekly_seasonality,
                origin,
                record.date,
                record.sentiment,
            ));
        }
        let x = DMatrix::from_row_slice(rows, columns, &design);
        let y = DVector::from_iterator(rows, history.iter().map(|record| record.rate));

        let beta = solve_least_squares(&x, &y).ok_or_else(|| {
            ForecastError::ModelFit("least-squares solve did not converge".to_string())
        })?;

        let fitted_vector = &x * &beta;
        let fitted: Vec<f64> = fitted_vector.iter().copied().collect();
        let residual_std = residual_std(&y, &fitted_vector, columns);

        Ok(TrainedTrendRegressor {
            name: self.name.clone(),
            weekly_seasonality: self.weekly_seasonality,
            origin,
            beta: beta.iter().copied().collect(),
            fitted,
            residual_std,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn residual_std(y: &DVector<f64>, fitted: &DVector<f64>, coefficients: usize) -> f64 {
    let n = y.len();
    if n <= coefficients {
        return 0.0;
    }
    let sum_squared: f64 = y
        .iter()
        .zip(fitted.iter())
        .map(|(actual, predicted)| (actual - predicted).powi(2))
        .sum();
    (sum_squared / (n - coefficients) as f64).sqrt()
}

impl TrainedForecastModel for TrainedTrendRegressor {
    fn predict(&self, frame: &FutureFrame) -> Result<Vec<f64>> {
        let mut predictions = Vec::with_capacity(frame.len());
        for point in frame.iter() {
            let row = design_row(
                self.weekly_seasonality,
                self.origin,
                point.date,
                point.sentiment,
            );
            let predicted: f64 = row
                .iter()
                .zip(self.beta.iter())
                .map(|(x, coefficient)| x * coefficient)
                .sum();
            if !predicted.is_finite() {
                return Err(ForecastError::ModelPredict(format!(
                    "non-finite prediction for {}",
                    point.date
                )));
            }
            predictions.push(predicted);
        }
        Ok(predictions)
    }

    fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    fn residual_std(&self) -> f64 {
        self.residual_std
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedTrendRegressor {
    /// Fitted coefficients in design-column order: intercept, trend slope,
    /// sentiment weight, then weekday dummies when enabled
    pub fn coefficients(&self) -> &[f64] {
        &self.beta
    }
}

//! In-sample accuracy metrics for fitted models

use crate::error::{ForecastError, Result};

/// Accuracy of fitted values against the observed history
#[derive(Debug, Clone)]
pub struct Accuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error
    pub mape: f64,
}

/// Compare fitted values against the actual series they were fitted on
pub fn in_sample_accuracy(fitted: &[f64], actual: &[f64]) -> Result<Accuracy> {
    if fitted.len() != actual.len() || fitted.is_empty() {
        return Err(ForecastError::InvalidParameter(
            "fitted and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = fitted.len() as f64;

    let errors: Vec<f64> = fitted
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| a - f)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;
    let rmse = mse.sqrt();

    // Zero actuals are skipped rather than dividing by zero
    let mape = actual
        .iter()
        .zip(errors.iter())
        .filter(|(&a, _)| a != 0.0)
        .map(|(&a, &e)| (e.abs() / a.abs()) * 100.0)
        .sum::<f64>()
        / n;

    Ok(Accuracy { mae, rmse, mape })
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "In-sample fit:")?;
        writeln!(f, "  MAE:  {:.4}", self.mae)?;
        writeln!(f, "  RMSE: {:.4}", self.rmse)?;
        write!(f, "  MAPE: {:.4}%", self.mape)?;
        Ok(())
    }
}

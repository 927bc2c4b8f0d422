//! Utility functions for generating synthetic series
//!
//! Used by tests and examples that need plausible daily data without
//! touching a real source.

use crate::Series;
use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Generate a random-walk daily series for testing purposes
///
/// # Arguments
/// * `num_points` - Number of consecutive daily observations
/// * `start_date` - Date of the first observation
/// * `base_value` - Starting value of the walk
/// * `volatility` - Per-day relative change bound (0.0-1.0)
pub fn generate_test_series(
    num_points: usize,
    start_date: NaiveDate,
    base_value: f64,
    volatility: f64,
) -> Series {
    let mut rng = rand::thread_rng();
    let mut value = base_value;
    let mut series = Series::new();

    for i in 0..num_points {
        let date = start_date + Duration::days(i as i64);
        let change = rng.gen_range(-volatility..=volatility);
        value *= 1.0 + change;
        series.insert(date, value);
    }

    series
}

/// Generate a daily sentiment series with scores in `[-1.0, 1.0]`
pub fn generate_sentiment_series(num_points: usize, start_date: NaiveDate) -> Series {
    let mut rng = rand::thread_rng();
    let mut series = Series::new();

    for i in 0..num_points {
        let date = start_date + Duration::days(i as i64);
        series.insert(date, rng.gen_range(-1.0..=1.0));
    }

    series
}

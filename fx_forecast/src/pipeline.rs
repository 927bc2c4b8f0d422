//! End-to-end forecast pipeline shared by front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! fetch both series -> align -> fit -> extend regressor -> predict.
//! Front-ends then focus on presentation.

use crate::align;
use crate::engine::{Forecast, ForecastEngine, Horizon};
use crate::error::Result;
use crate::models::{ForecastModel, TrendRegressor};
use fx_data::{DateRange, SeriesSource};

/// Run the full pipeline with the default trend + sentiment model.
pub fn run_forecast<R, S>(
    rate_source: &R,
    sentiment_source: &S,
    range: &DateRange,
    horizon: Horizon,
) -> Result<Forecast>
where
    R: SeriesSource,
    S: SeriesSource,
{
    run_forecast_with_model(rate_source, sentiment_source, range, horizon, TrendRegressor::new())
}

/// Run the full pipeline with an explicit model configuration.
///
/// Both series are fetched once at the start, so alignment and forecasting
/// see a single consistent snapshot even when the sources cache.
pub fn run_forecast_with_model<R, S, M>(
    rate_source: &R,
    sentiment_source: &S,
    range: &DateRange,
    horizon: Horizon,
    model: M,
) -> Result<Forecast>
where
    R: SeriesSource,
    S: SeriesSource,
    M: ForecastModel,
{
    // 1) Load both series from their sources.
    let rate = rate_source.fetch(range)?;
    let sentiment = sentiment_source.fetch(range)?;
    tracing::debug!(
        rate_points = rate.len(),
        sentiment_points = sentiment.len(),
        "series loaded"
    );

    // 2) Inner-join on date.
    let aligned = align::align(&rate, &sentiment);
    tracing::debug!(aligned_points = aligned.len(), "series aligned");

    // 3) Fit and forecast; extension reads the full sentiment series so
    //    scores newer than the last matched rate reading still count.
    let engine = ForecastEngine::new(model);
    engine.forecast(&aligned, &sentiment, horizon)
}

use chrono::{Duration, NaiveDate};
use fx_data::Series;
use fx_forecast::models::TrendRegressor;
use fx_forecast::{align, ForecastEngine, Horizon};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("fx_forecast: Sentiment-Regressor Forecasting Example");
    println!("=====================================================\n");

    // Create sample data
    println!("Creating sample series...");
    let rate_series = create_sample_rate_series();
    let sentiment_series = create_sample_sentiment_series();
    println!(
        "Sample series created: {} rate points, {} sentiment points\n",
        rate_series.len(),
        sentiment_series.len()
    );

    // Align the two series on date
    let aligned = align(&rate_series, &sentiment_series);
    println!("Aligned history: {} shared dates", aligned.len());

    // Fit and forecast 7 days past the end of the history
    let engine = ForecastEngine::new(TrendRegressor::new());
    let horizon = Horizon::new(7)?;
    let forecast = engine.forecast(&aligned, &sentiment_series, horizon)?;

    println!("\nForecast ({}):", forecast.model());
    for row in forecast.rows() {
        println!("  {}  {:.2}", row.date, row.predicted);
    }

    // 95% confidence interval around each point
    let intervals = forecast.confidence_intervals(0.95)?;
    println!("\n95% confidence intervals:");
    for (row, (lower, upper)) in forecast.rows().iter().zip(intervals) {
        println!("  {}  ({:.2}, {:.2})", row.date, lower, upper);
    }

    println!("\n{}", forecast.in_sample());

    // The same engine with weekly seasonality enabled
    let weekly_engine = ForecastEngine::new(TrendRegressor::new().with_weekly_seasonality());
    let weekly = weekly_engine.forecast(&aligned, &sentiment_series, horizon)?;
    println!("\nWith weekly seasonality ({}):", weekly.model());
    for row in weekly.rows() {
        println!("  {}  {:.2}", row.date, row.predicted);
    }

    Ok(())
}

/// Sixty days of rates with a gentle upward trend and some noise
fn create_sample_rate_series() -> Series {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let mut series = Series::new();
    let mut rate = 1380.0;

    for i in 0..60 {
        let date = start + Duration::days(i);
        let noise = (i as f64 * 0.7).sin() * 2.5;
        rate += 0.4;
        series.insert(date, rate + noise);
    }

    series
}

/// Sentiment scores for the same window, oscillating in [-1, 1], with the
/// last few days missing so the forecast has to carry the final score
/// forward
fn create_sample_sentiment_series() -> Series {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let mut series = Series::new();

    for i in 0..55 {
        let date = start + Duration::days(i);
        let score = (i as f64 * 0.3).sin() * 0.8;
        series.insert(date, score);
    }

    series
}

//! `won-forecast`: CLI front-end for the KRW/USD sentiment forecast.
//!
//! Usage: `won-forecast [HORIZON] [SENTIMENT_CSV]`
//!
//! Requires `ECOS_API_KEY` in the environment (a `.env` file works).

use chrono::{NaiveDate, Utc};
use fx_data::{CachedSource, DateRange, EcosRateClient, SentimentCsvStore};
use fx_forecast::pipeline::run_forecast;
use fx_forecast::{Horizon, DEFAULT_HORIZON};
use std::process::ExitCode;

const DEFAULT_SENTIMENT_PATH: &str = "data/sentiment.csv";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("won-forecast: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let horizon_days = match args.next() {
        Some(raw) => raw.parse::<u32>()?,
        None => DEFAULT_HORIZON,
    };
    let sentiment_path = args
        .next()
        .unwrap_or_else(|| DEFAULT_SENTIMENT_PATH.to_string());

    let horizon = Horizon::new(horizon_days)?;
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).ok_or("invalid history start date")?;
    let today = Utc::now().date_naive();
    let range = DateRange::new(start, today)?;

    let rate_source = CachedSource::new(EcosRateClient::from_env()?);
    let sentiment_source = SentimentCsvStore::new(&sentiment_path);

    let forecast = run_forecast(&rate_source, &sentiment_source, &range, horizon)?;

    println!(
        "Forecast for the next {} days (model: {})",
        horizon.days(),
        forecast.model()
    );
    println!();
    println!("{:<12} {:>16}", "date", "KRW/USD");
    for row in forecast.rows() {
        println!("{:<12} {:>16.2}", row.date, row.predicted);
    }

    let intervals = forecast.confidence_intervals(0.95)?;
    println!();
    println!("95% intervals:");
    for (row, (lower, upper)) in forecast.rows().iter().zip(intervals) {
        println!("{:<12} ({:>10.2}, {:>10.2})", row.date, lower, upper);
    }

    println!();
    println!("{}", forecast.in_sample());

    Ok(())
}

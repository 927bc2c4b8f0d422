//! Local news-sentiment store backed by a CSV file.

use crate::{DateRange, Result, Series, SeriesSource, SourceError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Daily sentiment scores read from a CSV file with a `ds` date column and
/// a `sentiment_score` value column.
///
/// A missing file surfaces as [`SourceError::Io`] and an undecodable row as
/// [`SourceError::Csv`] or [`SourceError::InvalidRow`]; the two failure
/// modes are deliberately kept apart so "file not provisioned" can be
/// distinguished from "file corrupted".
#[derive(Debug, Clone)]
pub struct SentimentCsvStore {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct SentimentRow {
    ds: String,
    sentiment_score: f64,
}

impl SentimentCsvStore {
    /// Create a store reading from `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeriesSource for SentimentCsvStore {
    fn fetch(&self, range: &DateRange) -> Result<Series> {
        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut series = Series::new();
        for record in reader.deserialize::<SentimentRow>() {
            let row = record?;
            let date = NaiveDate::parse_from_str(row.ds.trim(), "%Y-%m-%d")
                .map_err(|e| SourceError::InvalidRow(format!("bad ds '{}': {}", row.ds, e)))?;
            if range.contains(date) {
                series.insert(date, row.sentiment_score);
            }
        }

        tracing::debug!(
            points = series.len(),
            path = %self.path.display(),
            "sentiment series loaded"
        );
        Ok(series)
    }
}

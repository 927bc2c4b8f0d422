//! # fx_data
//!
//! `fx_data` provides the canonical daily time-series types and the data
//! sources used by the exchange-rate forecasting pipeline.
//!
//! Two sources exist:
//!
//! - **Exchange rates**: the Bank of Korea ECOS statistics API
//!   ([`EcosRateClient`])
//! - **News sentiment scores**: a local CSV file ([`SentimentCsvStore`])
//!
//! Both normalize their payloads into a [`Series`], an ordered mapping
//! from calendar date to value, behind the common [`SeriesSource`] trait,
//! so the forecast core never sees source-specific row formats.
//!
//! ## Usage Example
//!
//! ```
//! use chrono::NaiveDate;
//! use fx_data::{DateRange, Series, TimePoint};
//!
//! let series: Series = vec![
//!     TimePoint { date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(), value: 1381.5 },
//!     TimePoint { date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), value: 1380.0 },
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(series.first_date(), NaiveDate::from_ymd_opt(2025, 6, 1));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub mod cache;
pub mod ecos;
pub mod sentiment;
pub mod utils;

pub use cache::CachedSource;
pub use ecos::EcosRateClient;
pub use sentiment::SentimentCsvStore;

/// Errors that can occur while retrieving or decoding a series source
#[derive(Error, Debug)]
pub enum SourceError {
    /// HTTP transport failure (connection refused, timeout, TLS, ...)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote endpoint answered with a non-success status code
    #[error("unexpected HTTP status {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    /// The response body could not be decoded into the expected shape
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The remote API reported an application-level error code
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    /// A row's date or value failed to parse
    #[error("invalid row: {0}")]
    InvalidRow(String),

    /// A local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A local file could not be decoded as CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A query range with start after end
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A required configuration value is absent from the environment
    #[error("missing configuration: {0}")]
    MissingConfig(String),
}

/// Result type with our source error
pub type Result<T> = std::result::Result<T, SourceError>;

/// A single observation: one value on one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Date of the observation
    pub date: NaiveDate,
    /// Observed value
    pub value: f64,
}

/// An ordered daily series, semantically a mapping from date to value.
///
/// Keys are unique: inserting a second value for the same date replaces the
/// first. Iteration is always chronological regardless of insertion order.
/// Dates need not be contiguous; market series skip weekends and holidays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    points: BTreeMap<NaiveDate, f64>,
}

impl Series {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an observation; a later write for the same date wins
    pub fn insert(&mut self, date: NaiveDate, value: f64) {
        self.points.insert(date, value);
    }

    /// Value observed on exactly `date`, if any
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.points.get(&date).copied()
    }

    /// Most recent observation at or before `date`.
    ///
    /// This is the forward-fill primitive: the returned value is the one a
    /// carry-forward extension assigns to `date`.
    pub fn value_at_or_before(&self, date: NaiveDate) -> Option<(NaiveDate, f64)> {
        self.points
            .range(..=date)
            .next_back()
            .map(|(&observed, &value)| (observed, value))
    }

    /// Earliest observed date
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.keys().next().copied()
    }

    /// Latest observed date
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.keys().next_back().copied()
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate observations in chronological order
    pub fn iter(&self) -> impl Iterator<Item = TimePoint> + '_ {
        self.points
            .iter()
            .map(|(&date, &value)| TimePoint { date, value })
    }

    /// Iterate observed dates in chronological order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.keys().copied()
    }
}

impl FromIterator<TimePoint> for Series {
    fn from_iter<I: IntoIterator<Item = TimePoint>>(iter: I) -> Self {
        let mut series = Series::new();
        for point in iter {
            series.insert(point.date, point.value);
        }
        series
    }
}

impl FromIterator<(NaiveDate, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, f64)>>(iter: I) -> Self {
        let mut series = Series::new();
        for (date, value) in iter {
            series.insert(date, value);
        }
        series
    }
}

/// An inclusive calendar-date range used as the query key for sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range; fails if `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(SourceError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First date of the range
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the range
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check whether `date` falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Trait defining a source of daily series data.
///
/// A source must fail explicitly when it is unreachable or its payload is
/// malformed; an empty [`Series`] is reserved for the legitimate "no data
/// in this range" case so callers can tell the two apart.
pub trait SeriesSource {
    /// Retrieve all observations falling inside `range`
    fn fetch(&self, range: &DateRange) -> Result<Series>;
}

//! Inner-join alignment of the rate and sentiment series.

use chrono::NaiveDate;
use fx_data::Series;
use serde::{Deserialize, Serialize};

/// One date on which both a rate and a sentiment reading exist
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedRecord {
    /// Shared observation date
    pub date: NaiveDate,
    /// Exchange rate on that date (the target variable)
    pub rate: f64,
    /// Sentiment score on that date (the exogenous regressor)
    pub sentiment: f64,
}

/// Inner-join two series on exact calendar date.
///
/// Dates present in only one series are silently dropped; output is
/// chronologically ascending. An empty intersection returns an empty
/// vector; rejecting that is the forecast engine's job, not this one's.
pub fn align(rate: &Series, sentiment: &Series) -> Vec<AlignedRecord> {
    rate.iter()
        .filter_map(|point| {
            sentiment.get(point.date).map(|score| AlignedRecord {
                date: point.date,
                rate: point.value,
                sentiment: score,
            })
        })
        .collect()
}

//! Forward-fill extension of the sentiment regressor over future dates.

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use fx_data::Series;
use std::collections::BTreeMap;

/// Resolve a regressor value for every target date.
///
/// A date observed in `regressor` uses its exact value; an unobserved date
/// takes the most recent value at or before it, carried across any number
/// of consecutive gaps. A date preceding every observation has nothing to
/// carry and fails with [`ForecastError::UnresolvableCovariate`].
///
/// The result depends only on the inputs, so repeated extension with the
/// same arguments yields the same mapping.
pub fn extend<I>(regressor: &Series, target_dates: I) -> Result<BTreeMap<NaiveDate, f64>>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut resolved = BTreeMap::new();
    for date in target_dates {
        match regressor.value_at_or_before(date) {
            Some((_, value)) => {
                resolved.insert(date, value);
            }
            None => return Err(ForecastError::UnresolvableCovariate { date }),
        }
    }
    Ok(resolved)
}

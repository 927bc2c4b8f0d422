//! Process-lifetime caching for series sources.
//!
//! The cache is an explicit wrapper keyed by the query range, not implicit
//! global state. Entries live until the process exits; there is no TTL.

use crate::{DateRange, Result, Series, SeriesSource};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

const DEFAULT_CAPACITY: usize = 32;

/// Wraps any [`SeriesSource`], memoizing successful fetches by [`DateRange`].
///
/// Failures are never cached, so a transient outage does not poison later
/// retries. During a single pipeline run the cache is only read, keeping
/// the rate and sentiment snapshots consistent with each other.
pub struct CachedSource<S> {
    inner: S,
    cache: Mutex<LruCache<DateRange, Series>>,
}

impl<S: SeriesSource> CachedSource<S> {
    /// Wrap `inner` with the default cache capacity
    pub fn new(inner: S) -> Self {
        Self::with_capacity(inner, DEFAULT_CAPACITY)
    }

    /// Wrap `inner`, keeping at most `capacity` distinct query results
    pub fn with_capacity(inner: S, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<DateRange, Series>> {
        // A poisoned lock only means another thread panicked mid-insert;
        // the map itself is still usable.
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<S: SeriesSource> SeriesSource for CachedSource<S> {
    fn fetch(&self, range: &DateRange) -> Result<Series> {
        if let Some(hit) = self.lock().get(range) {
            tracing::debug!(start = %range.start(), end = %range.end(), "cache hit");
            return Ok(hit.clone());
        }

        let series = self.inner.fetch(range)?;
        self.lock().put(*range, series.clone());
        Ok(series)
    }
}

//! Compute-once cache of generated series, keyed by configuration.
//!
//! The first caller for a given [`GeneratorConfig`] runs the generator; every
//! later caller (including ones racing it on other threads) gets the very same
//! `Arc<Series>`. Random draws therefore happen once per configuration for as
//! long as the cache lives.
//!
//! Implementation notes:
//! - The map lock only guards slot lookup. Generation happens inside a
//!   per-key `OnceCell`, so concurrent callers for one key block on that cell
//!   and never see a half-built series, while other keys proceed.
//! - A failed generation leaves the cell empty; the next caller retries.
//! - [`global`] is the process-lifetime instance. Tests should build their own
//!   [`SeriesCache`] to stay independent.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use once_cell::sync::{Lazy, OnceCell};
use tracing::{debug, trace};

use crate::errors::ConfigError;
use crate::generator::{BucketSeriesGenerator, DrawSource, RngDraws};
use crate::models::{
    generator_config::{GeneratorConfig, SeriesKey},
    series::Series,
};

type Slot = Arc<OnceCell<Arc<Series>>>;

/// Memoizes one [`Series`] per [`SeriesKey`].
#[derive(Debug, Default)]
pub struct SeriesCache {
    slots: Mutex<HashMap<SeriesKey, Slot>>,
}

impl SeriesCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached series for `config`, generating it with a source
    /// from `make_source` if this is the first request.
    ///
    /// `make_source` is only called when generation actually runs.
    pub fn get_or_generate<S, F>(
        &self,
        config: &GeneratorConfig,
        make_source: F,
    ) -> Result<Arc<Series>, ConfigError>
    where
        S: DrawSource,
        F: FnOnce() -> S,
    {
        config.validate()?;
        let slot = self.slot(config.cache_key());
        let series = slot.get_or_try_init(|| {
            debug!(
                bucket_count = config.bucket_count,
                base_price = config.base_price,
                "series cache miss"
            );
            BucketSeriesGenerator::new(make_source())
                .generate(config)
                .map(Arc::new)
        })?;
        trace!("series cache hit");
        Ok(Arc::clone(series))
    }

    /// The cached series for `config`, if one has been generated.
    pub fn get(&self, config: &GeneratorConfig) -> Option<Arc<Series>> {
        self.lock()
            .get(&config.cache_key())
            .and_then(|slot| slot.get().cloned())
    }

    /// Forgets the series for `config`; the next request draws a new one.
    ///
    /// Returns `true` if an entry was removed. Callers already holding the
    /// old `Arc` keep it.
    pub fn invalidate(&self, config: &GeneratorConfig) -> bool {
        self.lock().remove(&config.cache_key()).is_some()
    }

    /// Drops every cached series.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of fully generated series currently held.
    pub fn len(&self) -> usize {
        self.lock().values().filter(|s| s.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, key: SeriesKey) -> Slot {
        Arc::clone(self.lock().entry(key).or_default())
    }

    // Nothing panics while the lock is held, but recover from poisoning
    // anyway: the map itself is always consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<SeriesKey, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Process-lifetime cache: starts empty, filled on demand.
static GLOBAL: Lazy<SeriesCache> = Lazy::new(SeriesCache::new);

/// The process-wide [`SeriesCache`].
pub fn global() -> &'static SeriesCache {
    &GLOBAL
}

/// The session's simulated series for `config`, drawn from fresh entropy the
/// first time it is requested in this process.
pub fn simulated_series(config: &GeneratorConfig) -> Result<Arc<Series>, ConfigError> {
    global().get_or_generate(config, RngDraws::from_entropy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn small() -> GeneratorConfig {
        GeneratorConfig {
            bucket_count: 12,
            ..Default::default()
        }
    }

    #[test]
    fn second_request_returns_same_allocation() {
        let cache = SeriesCache::new();
        let a = cache.get_or_generate(&small(), || RngDraws::seeded(1)).unwrap();
        let b = cache.get_or_generate(&small(), || RngDraws::seeded(2)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn source_factory_runs_once() {
        let cache = SeriesCache::new();
        let calls = AtomicUsize::new(0);
        for _ in 0..3 {
            cache
                .get_or_generate(&small(), || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    RngDraws::seeded(5)
                })
                .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn distinct_configs_get_distinct_series() {
        let cache = SeriesCache::new();
        let a = cache.get_or_generate(&small(), || RngDraws::seeded(1)).unwrap();
        let other = GeneratorConfig {
            base_price: 100.0,
            ..small()
        };
        let b = cache.get_or_generate(&other, || RngDraws::seeded(1)).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn invalidate_forces_a_new_draw() {
        let cache = SeriesCache::new();
        let a = cache.get_or_generate(&small(), || RngDraws::seeded(1)).unwrap();
        assert!(cache.invalidate(&small()));
        assert!(cache.get(&small()).is_none());
        let b = cache.get_or_generate(&small(), || RngDraws::seeded(1)).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        // same seed, so same contents
        assert_eq!(*a, *b);
        assert!(!cache.invalidate(&GeneratorConfig::default()));
    }

    #[test]
    fn invalid_config_is_not_cached() {
        let cache = SeriesCache::new();
        let bad = GeneratorConfig {
            bucket_count: 0,
            ..Default::default()
        };
        let err = cache
            .get_or_generate(&bad, || RngDraws::seeded(1))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidBucketCount);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = SeriesCache::new();
        cache.get_or_generate(&small(), || RngDraws::seeded(1)).unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}

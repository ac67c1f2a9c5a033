//! Parameters of one simulated series, and the key they are cached under.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default number of buckets in a generated series.
pub const DEFAULT_BUCKET_COUNT: usize = 200;
/// Default starting price of the random walk.
pub const DEFAULT_BASE_PRICE: f64 = 4750.0;
/// Default bucket width in seconds.
pub const DEFAULT_BUCKET_SECS: u32 = 3;
/// 2022-01-03T09:00:00Z, the default first bucket.
pub const DEFAULT_START_UNIX: i64 = 1_641_200_400;

/// Configuration of the [`BucketSeriesGenerator`](crate::generator::BucketSeriesGenerator).
///
/// Deserializes from TOML/JSON with every field optional; `start_time` is an
/// RFC 3339 string such as `"2022-01-03T09:00:00Z"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of buckets to generate. Must be non-zero.
    pub bucket_count: usize,
    /// Price the walk starts from. Must be finite.
    pub base_price: f64,
    /// Width of each bucket in seconds. Must be non-zero.
    pub bucket_secs: u32,
    /// Timestamp of the first bucket.
    pub start_time: DateTime<Utc>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            base_price: DEFAULT_BASE_PRICE,
            bucket_secs: DEFAULT_BUCKET_SECS,
            start_time: DateTime::from_timestamp(DEFAULT_START_UNIX, 0)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket_count == 0 {
            return Err(ConfigError::InvalidBucketCount);
        }
        if !self.base_price.is_finite() {
            return Err(ConfigError::NonFiniteBasePrice(self.base_price));
        }
        if self.bucket_secs == 0 {
            return Err(ConfigError::InvalidBucketDuration);
        }
        let span = i64::try_from(self.bucket_count)
            .ok()
            .and_then(|n| n.checked_mul(i64::from(self.bucket_secs)))
            .and_then(Duration::try_seconds);
        if span
            .and_then(|d| self.start_time.checked_add_signed(d))
            .is_none()
        {
            return Err(ConfigError::TimestampOverflow {
                bucket_count: self.bucket_count,
                bucket_secs: self.bucket_secs,
            });
        }
        Ok(())
    }

    /// Width of one bucket.
    pub fn bucket_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.bucket_secs))
    }

    /// Hashable identity of this configuration.
    pub fn cache_key(&self) -> SeriesKey {
        SeriesKey {
            bucket_count: self.bucket_count,
            base_price_bits: self.base_price.to_bits(),
            bucket_secs: self.bucket_secs,
            start_time: self.start_time,
        }
    }
}

/// Cache key derived from a [`GeneratorConfig`].
///
/// The base price is compared by bit pattern so the key can be `Eq + Hash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesKey {
    bucket_count: usize,
    base_price_bits: u64,
    bucket_secs: u32,
    start_time: DateTime<Utc>,
}

use thiserror::Error;

/// Invalid generator parameters, reported when a series is requested.
///
/// None of these are recoverable inside the crate; the caller has to fix the
/// configuration and ask again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A series must contain at least one bucket.
    #[error("bucket_count must be greater than zero")]
    InvalidBucketCount,

    /// The random walk cannot start from NaN or an infinity.
    #[error("base_price must be finite, got {0}")]
    NonFiniteBasePrice(f64),

    /// Timestamps must strictly increase, so buckets need a positive width.
    #[error("bucket_secs must be greater than zero")]
    InvalidBucketDuration,

    /// The last bucket would fall outside the representable time range.
    #[error("{bucket_count} buckets of {bucket_secs}s overflow the timestamp range")]
    TimestampOverflow { bucket_count: usize, bucket_secs: u32 },
}

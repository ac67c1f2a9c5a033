//! Tail selection of the buckets shown on the chart.

use crate::models::bucket::Bucket;

/// Returns the last `min(window_size, buckets.len())` buckets, in their
/// original order. A `window_size` of zero yields an empty slice.
pub fn select_window(buckets: &[Bucket], window_size: usize) -> &[Bucket] {
    let start = buckets.len().saturating_sub(window_size);
    &buckets[start..]
}

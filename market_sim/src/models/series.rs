//! An ordered, immutable run of buckets for one configuration.

use serde::Serialize;

use crate::models::{bucket::Bucket, generator_config::GeneratorConfig};
use crate::window::select_window;

/// Buckets in chronological order, together with the configuration that
/// produced them. Shared read-only (usually behind an `Arc`) once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Configuration the buckets were generated from.
    pub config: GeneratorConfig,
    /// Index order is chronological order.
    pub buckets: Vec<Bucket>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The most recent `window_size` buckets. See [`select_window`].
    pub fn tail(&self, window_size: usize) -> &[Bucket] {
        select_window(&self.buckets, window_size)
    }
}

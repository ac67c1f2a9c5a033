//! Synthetic market-data generation for the bubble chart.
//!
//! The crate produces a [`Series`](models::series::Series) of fixed-duration
//! [`Bucket`](models::bucket::Bucket)s whose price follows a bounded random
//! walk and whose buy/sell volume is split into market and pending parts.
//! Generated series are memoized per configuration in [`cache`], and
//! [`window`] slices the most recent buckets for display.

pub mod cache;
pub mod errors;
pub mod generator;
pub mod models;
pub mod window;

pub use cache::{SeriesCache, simulated_series};
pub use errors::ConfigError;
pub use generator::{BucketSeriesGenerator, DrawSource, RngDraws, StepSampler};
pub use models::{
    bucket::{Bucket, VolumeDraw},
    generator_config::{GeneratorConfig, SeriesKey},
    series::Series,
};
pub use window::select_window;

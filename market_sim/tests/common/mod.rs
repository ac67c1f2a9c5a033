#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use market_sim::GeneratorConfig;

/// A configuration small enough to generate many times per test.
pub fn small_config(bucket_count: usize) -> GeneratorConfig {
    GeneratorConfig {
        bucket_count,
        base_price: 4750.0,
        bucket_secs: 3,
        start_time: Utc.with_ymd_and_hms(2022, 1, 3, 9, 0, 0).unwrap(),
    }
}

//! The bucket series generator.
//!
//! [`BucketSeriesGenerator`] walks the price from the configured base value
//! one weighted step per bucket and attaches four independent volume draws.
//! All randomness comes from the injected [`DrawSource`], so a seeded or
//! scripted source reproduces a series exactly.

mod draws;
mod sampler;

pub use draws::{DrawSource, MARKET_VOLUME_RANGE, PENDING_VOLUME_RANGE, RngDraws};
pub use sampler::{STEP_WEIGHTS, STEPS, StepSampler};

use tracing::debug;

use crate::errors::ConfigError;
use crate::models::{
    bucket::{Bucket, VolumeDraw},
    generator_config::GeneratorConfig,
    series::Series,
};

/// Builds [`Series`] from a [`GeneratorConfig`] and a [`DrawSource`].
#[derive(Debug, Clone)]
pub struct BucketSeriesGenerator<S> {
    source: S,
}

impl<S: DrawSource> BucketSeriesGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generates exactly `config.bucket_count` buckets.
    ///
    /// Fails only when the configuration is invalid; the draws themselves
    /// cannot fail.
    pub fn generate(&mut self, config: &GeneratorConfig) -> Result<Series, ConfigError> {
        config.validate()?;

        let width = config.bucket_duration();
        let mut price = config.base_price;
        let mut timestamp = config.start_time;
        let mut buckets = Vec::with_capacity(config.bucket_count);

        for _ in 0..config.bucket_count {
            price += self.source.price_step() as f64;

            let market_buy = self.source.market_volume();
            let market_sell = self.source.market_volume();
            let pending_buy = self.source.pending_volume();
            let pending_sell = self.source.pending_volume();

            buckets.push(Bucket::new(
                timestamp,
                price,
                VolumeDraw {
                    market_buy,
                    market_sell,
                    pending_buy,
                    pending_sell,
                },
            ));
            // validate() guarantees the final timestamp is representable.
            timestamp += width;
        }

        debug!(
            buckets = buckets.len(),
            base_price = config.base_price,
            final_price = price,
            "generated simulated series"
        );

        Ok(Series {
            config: config.clone(),
            buckets,
        })
    }

    /// Hands the draw source back, e.g. to check what a scripted source has left.
    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::VecDeque;

    /// Replays fixed draws in the order the generator requests them.
    struct Scripted {
        steps: VecDeque<i64>,
        market: VecDeque<u32>,
        pending: VecDeque<u32>,
    }

    impl Scripted {
        fn assert_exhausted(&self) {
            assert!(self.steps.is_empty(), "unused steps: {:?}", self.steps);
            assert!(self.market.is_empty(), "unused market draws: {:?}", self.market);
            assert!(self.pending.is_empty(), "unused pending draws: {:?}", self.pending);
        }
    }

    impl DrawSource for Scripted {
        fn price_step(&mut self) -> i64 {
            self.steps.pop_front().expect("script ran out of steps")
        }
        fn market_volume(&mut self) -> u32 {
            self.market.pop_front().expect("script ran out of market volume")
        }
        fn pending_volume(&mut self) -> u32 {
            self.pending.pop_front().expect("script ran out of pending volume")
        }
    }

    fn five_bucket_config() -> GeneratorConfig {
        GeneratorConfig {
            bucket_count: 5,
            base_price: 100.0,
            bucket_secs: 3,
            start_time: Utc.with_ymd_and_hms(2022, 1, 3, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn scripted_walk_produces_known_prices() {
        let source = Scripted {
            steps: [1, -1, 0, 2, -2].into(),
            market: std::iter::repeat_n(5, 10).collect(),
            pending: std::iter::repeat_n(10, 10).collect(),
        };
        let mut generator = BucketSeriesGenerator::new(source);
        let series = generator.generate(&five_bucket_config()).unwrap();
        generator.into_source().assert_exhausted();

        let prices: Vec<f64> = series.buckets.iter().map(|b| b.price).collect();
        assert_eq!(prices, vec![101.0, 100.0, 100.0, 102.0, 100.0]);
        for b in &series.buckets {
            assert_eq!(b.buy_volume, 15);
            assert_eq!(b.sell_volume, 15);
            assert_eq!(b.total_volume, 30);
            assert_eq!(b.buy_ratio(), Some(0.5));
        }
        let labels: Vec<String> = series
            .buckets
            .iter()
            .map(|b| b.timestamp.format("%H:%M:%S").to_string())
            .collect();
        assert_eq!(
            labels,
            ["09:00:00", "09:00:03", "09:00:06", "09:00:09", "09:00:12"]
        );
    }

    #[test]
    fn buy_and_sell_draws_are_assigned_in_order() {
        let source = Scripted {
            steps: [0].into(),
            market: [1, 2].into(),
            pending: [11, 12].into(),
        };
        let cfg = GeneratorConfig {
            bucket_count: 1,
            ..five_bucket_config()
        };
        let mut generator = BucketSeriesGenerator::new(source);
        let series = generator.generate(&cfg).unwrap();
        generator.into_source().assert_exhausted();
        let b = &series.buckets[0];
        assert_eq!(b.market_buy_volume, 1);
        assert_eq!(b.market_sell_volume, 2);
        assert_eq!(b.pending_buy_volume, 11);
        assert_eq!(b.pending_sell_volume, 12);
    }

    #[test]
    fn invalid_config_draws_nothing() {
        let source = Scripted {
            steps: VecDeque::new(),
            market: VecDeque::new(),
            pending: VecDeque::new(),
        };
        let cfg = GeneratorConfig {
            bucket_count: 0,
            ..five_bucket_config()
        };
        let mut generator = BucketSeriesGenerator::new(source);
        let err = generator.generate(&cfg).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBucketCount);
        generator.into_source().assert_exhausted();
    }

    #[test]
    fn price_walk_is_unclamped() {
        let source = Scripted {
            steps: std::iter::repeat_n(-2, 4).collect(),
            market: std::iter::repeat_n(0, 8).collect(),
            pending: std::iter::repeat_n(10, 8).collect(),
        };
        let cfg = GeneratorConfig {
            bucket_count: 4,
            base_price: 3.0,
            ..five_bucket_config()
        };
        let series = BucketSeriesGenerator::new(source).generate(&cfg).unwrap();
        assert_eq!(series.buckets.last().unwrap().price, -5.0);
    }
}

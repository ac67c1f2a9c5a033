//! Sources of the random draws consumed by the generator.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::sampler::StepSampler;

/// Range of the market (aggressive) buy and sell volumes.
pub const MARKET_VOLUME_RANGE: RangeInclusive<u32> = 0..=15;
/// Range of the pending (resting) buy and sell volumes.
pub const PENDING_VOLUME_RANGE: RangeInclusive<u32> = 10..=30;

/// Supplies the random values for each bucket.
///
/// For every bucket the generator calls, in order: [`price_step`],
/// [`market_volume`] (buy), [`market_volume`] (sell), [`pending_volume`]
/// (buy), [`pending_volume`] (sell).
///
/// [`price_step`]: DrawSource::price_step
/// [`market_volume`]: DrawSource::market_volume
/// [`pending_volume`]: DrawSource::pending_volume
pub trait DrawSource {
    /// Next price move, one of `-2..=2`.
    fn price_step(&mut self) -> i64;

    /// Next market volume, within [`MARKET_VOLUME_RANGE`].
    fn market_volume(&mut self) -> u32;

    /// Next pending volume, within [`PENDING_VOLUME_RANGE`].
    fn pending_volume(&mut self) -> u32;
}

impl<T: DrawSource + ?Sized> DrawSource for &mut T {
    fn price_step(&mut self) -> i64 {
        (**self).price_step()
    }

    fn market_volume(&mut self) -> u32 {
        (**self).market_volume()
    }

    fn pending_volume(&mut self) -> u32 {
        (**self).pending_volume()
    }
}

/// [`DrawSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDraws<R> {
    rng: R,
    steps: StepSampler,
}

impl<R: Rng> RngDraws<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            steps: StepSampler,
        }
    }
}

impl RngDraws<StdRng> {
    /// Reproducible draws for tests and `--seed` runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Fresh draws for a new session.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> DrawSource for RngDraws<R> {
    fn price_step(&mut self) -> i64 {
        self.steps.sample(&mut self.rng)
    }

    fn market_volume(&mut self) -> u32 {
        self.rng.gen_range(MARKET_VOLUME_RANGE)
    }

    fn pending_volume(&mut self) -> u32 {
        self.rng.gen_range(PENDING_VOLUME_RANGE)
    }
}

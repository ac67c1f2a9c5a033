//! Weighted price-step sampling.

use rand::Rng;

/// Possible price moves per bucket.
pub const STEPS: [i64; 5] = [-2, -1, 0, 1, 2];
/// Relative weight of each entry in [`STEPS`].
pub const STEP_WEIGHTS: [u32; 5] = [1, 3, 4, 3, 1];

const fn cumulative(weights: [u32; 5]) -> [u32; 5] {
    let mut out = [0; 5];
    let mut acc = 0;
    let mut i = 0;
    while i < weights.len() {
        acc += weights[i];
        out[i] = acc;
        i += 1;
    }
    out
}

/// Inverse-CDF sampler over [`STEPS`] weighted by [`STEP_WEIGHTS`].
///
/// A uniform integer `u` in `[0, total_weight)` maps to the first step whose
/// cumulative weight exceeds `u`, so each step is hit by exactly `weight` of
/// the `total_weight` possible draws. The weights are symmetric, which keeps
/// the expected step at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepSampler;

impl StepSampler {
    const CUMULATIVE: [u32; 5] = cumulative(STEP_WEIGHTS);

    /// Sum of all weights; uniform draws are taken from `0..total_weight()`.
    pub const fn total_weight(&self) -> u32 {
        Self::CUMULATIVE[Self::CUMULATIVE.len() - 1]
    }

    /// Maps a uniform draw to its step. Draws at or beyond the total weight
    /// saturate to the largest step.
    pub fn step_for(&self, u: u32) -> i64 {
        let idx = Self::CUMULATIVE.partition_point(|&c| c <= u);
        STEPS[idx.min(STEPS.len() - 1)]
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        self.step_for(rng.gen_range(0..self.total_weight()))
    }
}

//! The host's window-size control: a discrete range of allowed sizes.
//!
//! The layout core accepts any window size; this type only encodes which
//! values the chart host offers to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections from [`WindowSlider`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    /// The value lies outside `[min, max]`.
    #[error("window size {value} is outside {min}..={max}")]
    OutOfRange {
        /// Requested size.
        value: usize,
        /// Smallest allowed size.
        min: usize,
        /// Largest allowed size.
        max: usize,
    },

    /// The value is not `min + k * step`.
    #[error("window size {value} is not a multiple of {step} above {min}")]
    OffStep {
        /// Requested size.
        value: usize,
        /// Distance between allowed sizes.
        step: usize,
        /// Smallest allowed size.
        min: usize,
    },

    /// The slider settings themselves are inconsistent.
    #[error("invalid slider settings: {0}")]
    Misconfigured(String),
}

/// Allowed window sizes: `min..=max` in increments of `step`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSlider {
    /// Smallest selectable window.
    pub min: usize,
    /// Largest selectable window.
    pub max: usize,
    /// Increment between selectable windows.
    pub step: usize,
    /// Window used when the caller does not choose one.
    pub default: usize,
}

impl Default for WindowSlider {
    fn default() -> Self {
        Self {
            min: 20,
            max: 200,
            step: 10,
            default: 80,
        }
    }
}

impl WindowSlider {
    /// Checks that the settings describe a non-empty range containing `default`.
    pub fn check(&self) -> Result<(), SliderError> {
        if self.min == 0 {
            return Err(SliderError::Misconfigured("min must be at least 1".into()));
        }
        if self.step == 0 {
            return Err(SliderError::Misconfigured("step must be at least 1".into()));
        }
        if self.min > self.max {
            return Err(SliderError::Misconfigured(format!(
                "min {} exceeds max {}",
                self.min, self.max
            )));
        }
        self.validate(self.default)
            .map(|_| ())
            .map_err(|e| SliderError::Misconfigured(format!("default: {e}")))
    }

    /// Accepts `value` if the slider could produce it.
    pub fn validate(&self, value: usize) -> Result<usize, SliderError> {
        if value < self.min || value > self.max {
            return Err(SliderError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        if self.step == 0 || (value - self.min) % self.step != 0 {
            return Err(SliderError::OffStep {
                value,
                step: self.step,
                min: self.min,
            });
        }
        Ok(value)
    }

    /// Every selectable size, ascending.
    pub fn values(&self) -> impl Iterator<Item = usize> + '_ {
        (self.min..=self.max).step_by(self.step.max(1))
    }
}

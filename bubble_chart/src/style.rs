//! Presentation settings consumed by the layout engine.

use std::borrow::Cow;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a [`ChartStyle`] cannot be used for layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// `size_scale` must be finite and positive.
    #[error("size_scale must be finite and positive, got {0}")]
    SizeScale(f64),

    /// `radius_divisor` must be finite and positive.
    #[error("radius_divisor must be finite and positive, got {0}")]
    RadiusDivisor(f64),

    /// At least one x tick is needed.
    #[error("tick_count must be at least 1")]
    TickCount,

    /// `tick_format` is not a valid strftime pattern.
    #[error("invalid tick_format: {0:?}")]
    TickFormat(String),
}

/// Grid line settings passed through to the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridStyle {
    /// Whether grid lines are drawn at all.
    pub enabled: bool,
    /// Dash pattern, e.g. `"--"` for dashed lines.
    pub line_style: String,
    /// Line opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            line_style: "--".into(),
            alpha: 0.5,
        }
    }
}

/// Colors, labels and scale factors of the bubble chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartStyle {
    /// Chart title.
    pub title: String,
    /// Label under the time axis.
    pub x_label: String,
    /// Label next to the price axis.
    pub y_label: String,
    /// Fill of the buy wedge and its legend entry.
    pub buy_color: String,
    /// Fill of the sell wedge and its legend entry.
    pub sell_color: String,
    /// Legend text for the buy side.
    pub buy_label: String,
    /// Legend text for the sell side.
    pub sell_label: String,
    /// Marker size per unit of total volume.
    pub size_scale: f64,
    /// Radius is `sqrt(size) / radius_divisor`.
    pub radius_divisor: f64,
    /// Maximum number of x ticks.
    pub tick_count: usize,
    /// strftime pattern for tick labels.
    pub tick_format: String,
    /// Rotation of tick labels in degrees.
    pub tick_rotation_deg: f64,
    /// Grid settings.
    pub grid: GridStyle,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Buy/Sell Volume Bubble Chart Over Time".into(),
            x_label: "Time (3s Buckets)".into(),
            y_label: "Price".into(),
            buy_color: "green".into(),
            sell_color: "red".into(),
            buy_label: "Buy Volume (Market + Pending)".into(),
            sell_label: "Sell Volume (Market + Pending)".into(),
            size_scale: 20.0,
            radius_divisor: 10.0,
            tick_count: 10,
            tick_format: "%H:%M:%S".into(),
            tick_rotation_deg: 45.0,
            grid: GridStyle::default(),
        }
    }
}

impl ChartStyle {
    /// Checks the scale factors, tick count and tick format.
    pub fn validate(&self) -> Result<(), StyleError> {
        if !(self.size_scale.is_finite() && self.size_scale > 0.0) {
            return Err(StyleError::SizeScale(self.size_scale));
        }
        if !(self.radius_divisor.is_finite() && self.radius_divisor > 0.0) {
            return Err(StyleError::RadiusDivisor(self.radius_divisor));
        }
        if self.tick_count == 0 {
            return Err(StyleError::TickCount);
        }
        if !valid_tick_format(&self.tick_format) {
            return Err(StyleError::TickFormat(self.tick_format.clone()));
        }
        Ok(())
    }

    /// This style with every field [`validate`](Self::validate) would reject
    /// replaced by its default. Borrows when nothing needs replacing.
    pub fn sanitized(&self) -> Cow<'_, ChartStyle> {
        if self.validate().is_ok() {
            return Cow::Borrowed(self);
        }
        let defaults = ChartStyle::default();
        let mut style = self.clone();
        if !(style.size_scale.is_finite() && style.size_scale > 0.0) {
            style.size_scale = defaults.size_scale;
        }
        if !(style.radius_divisor.is_finite() && style.radius_divisor > 0.0) {
            style.radius_divisor = defaults.radius_divisor;
        }
        if style.tick_count == 0 {
            style.tick_count = defaults.tick_count;
        }
        if !valid_tick_format(&style.tick_format) {
            style.tick_format = defaults.tick_format;
        }
        Cow::Owned(style)
    }
}

fn valid_tick_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

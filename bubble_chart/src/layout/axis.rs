//! Axis ticks, bounds, legend and labels.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use market_sim::Bucket;
use serde::Serialize;

use crate::style::ChartStyle;

/// Fallback when a tick pattern cannot be rendered.
const FALLBACK_TICK_FORMAT: &str = "%H:%M:%S";

/// A labelled position on the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XTick {
    /// Window index the tick sits at.
    pub position: usize,
    /// Formatted timestamp of that bucket.
    pub label: String,
}

/// Visible data range.
///
/// `x_min` leaves one index of padding on the left; `x_max` is the window
/// length. `price_range` is the min/max bucket price, a hint only; the
/// surface may auto-range the price axis instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    /// Left edge of the time axis.
    pub x_min: f64,
    /// Right edge of the time axis.
    pub x_max: f64,
    /// Lowest and highest price in the window, `None` when it is empty.
    pub price_range: Option<(f64, f64)>,
}

/// One legend swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// Legend text.
    pub label: String,
    /// Swatch color.
    pub color: String,
}

/// Title and axis captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartLabels {
    /// Chart title.
    pub title: String,
    /// Time axis caption.
    pub x_label: String,
    /// Price axis caption.
    pub y_label: String,
}

/// Up to `count` evenly spaced indices across `[0, len - 1]`, ascending and
/// without duplicates.
///
/// Position `k` is `floor(k * (len - 1) / (count - 1))`, so windows shorter
/// than `count` simply get one tick per bucket.
pub fn tick_positions(len: usize, count: usize) -> Vec<usize> {
    if len == 0 || count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![0];
    }
    let last = len - 1;
    let mut out: Vec<usize> = (0..count).map(|k| k * last / (count - 1)).collect();
    out.dedup();
    out
}

/// Ticks for `window`, labelled with the bucket timestamps.
pub fn x_ticks(window: &[Bucket], style: &ChartStyle) -> Vec<XTick> {
    tick_positions(window.len(), style.tick_count)
        .into_iter()
        .map(|position| XTick {
            position,
            label: format_tick(window[position].timestamp, &style.tick_format),
        })
        .collect()
}

fn format_tick(ts: DateTime<Utc>, pattern: &str) -> String {
    let mut label = String::new();
    if write!(label, "{}", ts.format(pattern)).is_err() {
        label.clear();
        // The fallback pattern is known-good.
        let _ = write!(label, "{}", ts.format(FALLBACK_TICK_FORMAT));
    }
    label
}

/// Bounds for a window of `window.len()` buckets.
pub fn axis_bounds(window: &[Bucket]) -> AxisBounds {
    let price_range = window.iter().map(|b| b.price).fold(None, |acc, p| match acc {
        None => Some((p, p)),
        Some((lo, hi)) => Some((f64::min(lo, p), f64::max(hi, p))),
    });
    AxisBounds {
        x_min: -1.0,
        x_max: window.len() as f64,
        price_range,
    }
}

/// The fixed buy/sell legend.
pub fn legend(style: &ChartStyle) -> [LegendEntry; 2] {
    [
        LegendEntry {
            label: style.buy_label.clone(),
            color: style.buy_color.clone(),
        },
        LegendEntry {
            label: style.sell_label.clone(),
            color: style.sell_color.clone(),
        },
    ]
}

/// Title and axis captions from `style`.
pub fn labels(style: &ChartStyle) -> ChartLabels {
    ChartLabels {
        title: style.title.clone(),
        x_label: style.x_label.clone(),
        y_label: style.y_label.clone(),
    }
}

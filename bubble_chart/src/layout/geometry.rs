//! Per-bucket bubble geometry.

use market_sim::Bucket;
use serde::Serialize;

use crate::style::ChartStyle;

/// Angle where the buy wedge starts (pointing up).
pub const START_ANGLE_DEG: f64 = 90.0;
/// One full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// A position in data coordinates: x is the window index, y the price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Window index.
    pub x: f64,
    /// Price.
    pub y: f64,
}

/// A filled pie slice from `start_deg` to `end_deg`, counter-clockwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wedge {
    /// Center of the circle.
    pub center: Point,
    /// Circle radius in data units.
    pub radius: f64,
    /// Start angle in degrees.
    pub start_deg: f64,
    /// End angle in degrees, never below `start_deg`.
    pub end_deg: f64,
    /// Fill color.
    pub color: String,
}

impl Wedge {
    /// Angular extent in degrees.
    pub fn span_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }
}

/// One bucket drawn as a circle split into a buy and a sell wedge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bubble {
    /// Index of the bucket within the window.
    pub index: usize,
    /// Shared center of both wedges.
    pub center: Point,
    /// Shared radius of both wedges.
    pub radius: f64,
    /// Buy share of the bucket's total volume.
    pub buy_ratio: f64,
    /// Buy wedge, starting at [`START_ANGLE_DEG`].
    pub buy: Wedge,
    /// Sell wedge, covering the rest of the circle.
    pub sell: Wedge,
}

/// Radius of a bubble for `total_volume`.
///
/// `size = total_volume * size_scale` acts as the marker area, so the radius
/// grows with `sqrt(total_volume)`.
pub fn radius_for(total_volume: u32, style: &ChartStyle) -> f64 {
    let size = f64::from(total_volume) * style.size_scale;
    size.sqrt() / style.radius_divisor
}

impl Bubble {
    /// Lays out the bucket at `index`, or `None` when it has no volume.
    pub fn for_bucket(index: usize, bucket: &Bucket, style: &ChartStyle) -> Option<Self> {
        let buy_ratio = bucket.buy_ratio()?;
        let center = Point {
            x: index as f64,
            y: bucket.price,
        };
        let radius = radius_for(bucket.total_volume, style);
        let split_deg = START_ANGLE_DEG + FULL_TURN_DEG * buy_ratio;

        Some(Self {
            index,
            center,
            radius,
            buy_ratio,
            buy: Wedge {
                center,
                radius,
                start_deg: START_ANGLE_DEG,
                end_deg: split_deg,
                color: style.buy_color.clone(),
            },
            sell: Wedge {
                center,
                radius,
                start_deg: split_deg,
                end_deg: START_ANGLE_DEG + FULL_TURN_DEG,
                color: style.sell_color.clone(),
            },
        })
    }
}

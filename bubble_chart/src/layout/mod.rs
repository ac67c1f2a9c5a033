//! Bubble layout: from a window of buckets to drawable shapes.
//!
//! Each bucket with volume becomes a [`Bubble`] centered at
//! `(window index, price)`. Its area is proportional to the total volume and
//! it is split into a buy wedge and a sell wedge whose angles are the buy and
//! sell shares of a full turn. Buckets without volume are skipped. Axis ticks
//! are chosen from the window alone and do not depend on which buckets were
//! skipped.

mod axis;
mod geometry;

pub use axis::{
    AxisBounds, ChartLabels, LegendEntry, XTick, axis_bounds, labels, legend, tick_positions,
    x_ticks,
};
pub use geometry::{Bubble, FULL_TURN_DEG, Point, START_ANGLE_DEG, Wedge, radius_for};

use market_sim::Bucket;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::style::{ChartStyle, GridStyle};

/// Everything a surface needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    /// One entry per bucket with non-zero volume, in window order.
    pub bubbles: Vec<Bubble>,
    /// Labelled time-axis ticks.
    pub x_ticks: Vec<XTick>,
    /// Rotation of the tick labels in degrees.
    pub tick_rotation_deg: f64,
    /// Visible data range.
    pub bounds: AxisBounds,
    /// Buy and sell legend entries, in that order.
    pub legend: [LegendEntry; 2],
    /// Title and axis captions.
    pub labels: ChartLabels,
    /// Grid settings.
    pub grid: GridStyle,
}

impl ChartLayout {
    /// Number of buckets skipped because they had no volume.
    pub fn skipped(&self, window_len: usize) -> usize {
        window_len.saturating_sub(self.bubbles.len())
    }

    /// Every wedge in drawing order: buy then sell, bubble by bubble.
    pub fn wedges(&self) -> impl Iterator<Item = &Wedge> {
        self.bubbles.iter().flat_map(|b| [&b.buy, &b.sell])
    }
}

/// Lays out `window` with `style`.
///
/// An empty window yields no bubbles and no ticks. Style fields that
/// [`ChartStyle::validate`] rejects are replaced by their defaults (see
/// [`ChartStyle::sanitized`]), so scale factors never produce infinite radii.
pub fn layout(window: &[Bucket], style: &ChartStyle) -> ChartLayout {
    if let Err(e) = style.validate() {
        warn!(error = %e, "invalid chart style, using defaults for rejected fields");
    }
    let style = style.sanitized();
    let style = style.as_ref();

    let bubbles: Vec<Bubble> = window
        .iter()
        .enumerate()
        .filter_map(|(i, bucket)| {
            let bubble = Bubble::for_bucket(i, bucket, style);
            if bubble.is_none() {
                trace!(index = i, "skipping bucket without volume");
            }
            bubble
        })
        .collect();

    debug!(
        window = window.len(),
        bubbles = bubbles.len(),
        "laid out bubble chart"
    );

    ChartLayout {
        bubbles,
        x_ticks: x_ticks(window, style),
        tick_rotation_deg: style.tick_rotation_deg,
        bounds: axis_bounds(window),
        legend: legend(style),
        labels: labels(style),
        grid: style.grid.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use market_sim::VolumeDraw;

    fn bucket(i: i64, price: f64, draw: VolumeDraw) -> Bucket {
        let t0 = Utc.with_ymd_and_hms(2022, 1, 3, 9, 0, 0).unwrap();
        Bucket::new(t0 + Duration::seconds(3 * i), price, draw)
    }

    fn even() -> VolumeDraw {
        VolumeDraw {
            market_buy: 5,
            market_sell: 5,
            pending_buy: 10,
            pending_sell: 10,
        }
    }

    #[test]
    fn empty_window_renders_nothing() {
        let l = layout(&[], &ChartStyle::default());
        assert!(l.bubbles.is_empty());
        assert!(l.x_ticks.is_empty());
        assert_eq!(l.bounds.x_min, -1.0);
        assert_eq!(l.bounds.x_max, 0.0);
        assert_eq!(l.wedges().count(), 0);
    }

    #[test]
    fn zero_volume_bucket_is_skipped_but_keeps_its_tick() {
        let window = vec![
            bucket(0, 100.0, even()),
            bucket(1, 101.0, VolumeDraw::default()),
            bucket(2, 102.0, even()),
        ];
        let l = layout(&window, &ChartStyle::default());
        let indices: Vec<usize> = l.bubbles.iter().map(|b| b.index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(l.skipped(window.len()), 1);
        let ticks: Vec<usize> = l.x_ticks.iter().map(|t| t.position).collect();
        assert_eq!(ticks, vec![0, 1, 2]);
        // x position is the window index, not the bubble count
        assert_eq!(l.bubbles[1].center, Point { x: 2.0, y: 102.0 });
    }

    #[test]
    fn wedges_alternate_buy_and_sell() {
        let window = vec![bucket(0, 1.0, even()), bucket(1, 2.0, even())];
        let l = layout(&window, &ChartStyle::default());
        let colors: Vec<&str> = l.wedges().map(|w| w.color.as_str()).collect();
        assert_eq!(colors, vec!["green", "red", "green", "red"]);
    }

    #[test]
    fn legend_and_labels_follow_style() {
        let l = layout(&[bucket(0, 1.0, even())], &ChartStyle::default());
        insta::assert_json_snapshot!(&l.legend, @r#"
        [
          {
            "label": "Buy Volume (Market + Pending)",
            "color": "green"
          },
          {
            "label": "Sell Volume (Market + Pending)",
            "color": "red"
          }
        ]
        "#);
        assert_eq!(l.labels.title, "Buy/Sell Volume Bubble Chart Over Time");
        assert_eq!(l.labels.x_label, "Time (3s Buckets)");
        assert_eq!(l.labels.y_label, "Price");
        assert_eq!(l.tick_rotation_deg, 45.0);
    }

    #[test]
    fn invalid_style_falls_back_to_default_scales() {
        let window: Vec<Bucket> = (0..20).map(|i| bucket(i, 1.0, even())).collect();
        let style = ChartStyle {
            tick_count: 0,
            radius_divisor: 0.0,
            sell_color: "black".into(),
            ..Default::default()
        };
        let l = layout(&window, &style);
        assert_eq!(l.x_ticks.len(), 10);
        assert!(l.bubbles.iter().all(|b| b.radius.is_finite()));
        assert_eq!(l.bubbles[0].radius, radius_for(30, &ChartStyle::default()));
        assert_eq!(l.bubbles[0].sell.color, "black");
    }

    #[test]
    fn custom_colors_reach_wedges_and_legend() {
        let style = ChartStyle {
            buy_color: "#2ca02c".into(),
            sell_color: "#d62728".into(),
            ..Default::default()
        };
        let l = layout(&[bucket(0, 1.0, even())], &style);
        assert_eq!(l.bubbles[0].buy.color, "#2ca02c");
        assert_eq!(l.legend[1].color, "#d62728");
    }
}

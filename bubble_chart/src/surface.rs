//! The contract with whatever actually draws the chart.
//!
//! A [`ChartSurface`] receives shape primitives and axis metadata; it knows
//! nothing about buckets. [`ChartLayout::draw_onto`] replays a layout onto a
//! surface in a fixed order:
//!
//! 1. x range
//! 2. wedges, bubble by bubble, buy before sell
//! 3. x ticks
//! 4. title and axis labels
//! 5. legend entries, buy then sell
//! 6. grid
//!
//! [`TextSurface`] is a line-per-primitive implementation used by the CLI.

use std::io::{self, Write};

use crate::layout::{ChartLabels, ChartLayout, LegendEntry, Wedge, XTick};
use crate::style::GridStyle;

/// A drawing backend.
pub trait ChartSurface {
    /// Failure reported by the backend.
    type Error;

    /// Sets the visible time-axis range.
    fn set_x_range(&mut self, min: f64, max: f64) -> Result<(), Self::Error>;

    /// Fills one pie slice.
    fn draw_wedge(&mut self, wedge: &Wedge) -> Result<(), Self::Error>;

    /// Places labelled ticks on the time axis.
    fn set_x_ticks(&mut self, ticks: &[XTick], rotation_deg: f64) -> Result<(), Self::Error>;

    /// Sets the title and axis captions.
    fn set_labels(&mut self, labels: &ChartLabels) -> Result<(), Self::Error>;

    /// Appends a legend swatch.
    fn add_legend_entry(&mut self, entry: &LegendEntry) -> Result<(), Self::Error>;

    /// Configures grid lines.
    fn set_grid(&mut self, grid: &GridStyle) -> Result<(), Self::Error>;
}

impl ChartLayout {
    /// Sends every primitive of this layout to `surface`.
    pub fn draw_onto<S: ChartSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.set_x_range(self.bounds.x_min, self.bounds.x_max)?;
        for wedge in self.wedges() {
            surface.draw_wedge(wedge)?;
        }
        surface.set_x_ticks(&self.x_ticks, self.tick_rotation_deg)?;
        surface.set_labels(&self.labels)?;
        for entry in &self.legend {
            surface.add_legend_entry(entry)?;
        }
        surface.set_grid(&self.grid)
    }
}

/// Writes one human-readable line per primitive.
#[derive(Debug)]
pub struct TextSurface<W> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartSurface for TextSurface<W> {
    type Error = io::Error;

    fn set_x_range(&mut self, min: f64, max: f64) -> io::Result<()> {
        writeln!(self.out, "x-range {min} {max}")
    }

    fn draw_wedge(&mut self, w: &Wedge) -> io::Result<()> {
        writeln!(
            self.out,
            "wedge center=({}, {}) r={:.4} {:.2}..{:.2} {}",
            w.center.x, w.center.y, w.radius, w.start_deg, w.end_deg, w.color
        )
    }

    fn set_x_ticks(&mut self, ticks: &[XTick], rotation_deg: f64) -> io::Result<()> {
        let parts: Vec<String> = ticks
            .iter()
            .map(|t| format!("{}={}", t.position, t.label))
            .collect();
        writeln!(self.out, "x-ticks rot={rotation_deg} {}", parts.join(" "))
    }

    fn set_labels(&mut self, labels: &ChartLabels) -> io::Result<()> {
        writeln!(self.out, "title {}", labels.title)?;
        writeln!(self.out, "x-label {}", labels.x_label)?;
        writeln!(self.out, "y-label {}", labels.y_label)
    }

    fn add_legend_entry(&mut self, entry: &LegendEntry) -> io::Result<()> {
        writeln!(self.out, "legend {} {}", entry.color, entry.label)
    }

    fn set_grid(&mut self, grid: &GridStyle) -> io::Result<()> {
        if grid.enabled {
            writeln!(self.out, "grid {} alpha={}", grid.line_style, grid.alpha)
        } else {
            writeln!(self.out, "grid off")
        }
    }
}

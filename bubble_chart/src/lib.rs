//! Buy/sell volume bubble chart over a simulated market.
//!
//! [`layout::layout`] turns a window of [`market_sim::Bucket`]s into bubbles,
//! ticks and legend entries; [`surface::ChartSurface`] is the seam to any
//! drawing backend. [`config`] loads the TOML settings used by the
//! `bubble-chart` binary.

#![deny(missing_docs)]

pub mod config;
pub mod layout;
pub mod slider;
pub mod style;
pub mod surface;

pub use config::ChartConfig;
pub use layout::{ChartLayout, layout};
pub use style::ChartStyle;

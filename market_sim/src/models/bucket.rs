//! One fixed-duration sample of simulated price and volume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four raw volume draws that make up a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeDraw {
    /// Aggressive buy volume.
    pub market_buy: u32,
    /// Aggressive sell volume.
    pub market_sell: u32,
    /// Resting buy volume.
    pub pending_buy: u32,
    /// Resting sell volume.
    pub pending_sell: u32,
}

/// A single time bucket of the simulated market.
///
/// The derived volume fields are filled in by [`Bucket::new`], which is the
/// only way the generator builds buckets, so the sums below always hold:
///
/// - `buy_volume == market_buy_volume + pending_buy_volume`
/// - `sell_volume == market_sell_volume + pending_sell_volume`
/// - `total_volume == buy_volume + sell_volume`
///
/// Only `Serialize` is derived: deserializing could produce a bucket whose
/// derived fields disagree with its raw volumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    /// Start of the bucket (UTC).
    pub timestamp: DateTime<Utc>,

    /// Price after this bucket's random-walk step. Not clamped.
    pub price: f64,

    pub market_buy_volume: u32,
    pub market_sell_volume: u32,
    pub pending_buy_volume: u32,
    pub pending_sell_volume: u32,

    /// Market plus pending buy volume.
    pub buy_volume: u32,
    /// Market plus pending sell volume.
    pub sell_volume: u32,
    /// Buy plus sell volume.
    pub total_volume: u32,
}

impl Bucket {
    pub fn new(timestamp: DateTime<Utc>, price: f64, draw: VolumeDraw) -> Self {
        let buy_volume = draw.market_buy + draw.pending_buy;
        let sell_volume = draw.market_sell + draw.pending_sell;
        Self {
            timestamp,
            price,
            market_buy_volume: draw.market_buy,
            market_sell_volume: draw.market_sell,
            pending_buy_volume: draw.pending_buy,
            pending_sell_volume: draw.pending_sell,
            buy_volume,
            sell_volume,
            total_volume: buy_volume + sell_volume,
        }
    }

    /// Fraction of the total volume on the buy side, in `[0, 1]`.
    ///
    /// Returns `None` for an empty bucket.
    pub fn buy_ratio(&self) -> Option<f64> {
        if self.total_volume == 0 {
            return None;
        }
        Some(f64::from(self.buy_volume) / f64::from(self.total_volume))
    }
}

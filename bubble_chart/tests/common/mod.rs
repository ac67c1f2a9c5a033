#![allow(dead_code)]

use std::collections::VecDeque;

use chrono::{DateTime, Duration, TimeZone, Utc};
use market_sim::{Bucket, DrawSource, VolumeDraw};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, 3, 9, 0, 0).unwrap()
}

/// Bucket `i` of a 3-second series with the given draw.
pub fn bucket(i: usize, price: f64, draw: VolumeDraw) -> Bucket {
    Bucket::new(t0() + Duration::seconds(3 * i as i64), price, draw)
}

/// Replays fixed draws in generator order.
pub struct Scripted {
    pub steps: VecDeque<i64>,
    pub market: VecDeque<u32>,
    pub pending: VecDeque<u32>,
}

impl DrawSource for Scripted {
    fn price_step(&mut self) -> i64 {
        self.steps.pop_front().expect("steps exhausted")
    }

    fn market_volume(&mut self) -> u32 {
        self.market.pop_front().expect("market volume exhausted")
    }

    fn pending_volume(&mut self) -> u32 {
        self.pending.pop_front().expect("pending volume exhausted")
    }
}

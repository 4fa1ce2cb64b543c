//! Rolling velocity windows behind the chart.

use std::collections::VecDeque;

use crate::state::SimulationSnapshot;

/// Snapshot velocities are m/s; the chart displays km/h.
pub const MS_TO_KMH: f64 = 3.6;

/// Default number of samples the chart keeps.
pub const DEFAULT_WINDOW: usize = 30;

/// Default decimation: keep one of every two incoming samples.
pub const DEFAULT_DECIMATION: u32 = 2;

/// Fixed-capacity sample windows feeding the velocity chart.
///
/// Incoming snapshots are decimated (one kept out of every `decimation`),
/// converted to a relative time base anchored at the first accepted sample,
/// and pushed into three equal-length windows, evicting the oldest entry
/// each time. Readers take the whole window and redraw, so the accessors
/// return full series rather than deltas.
#[derive(Debug)]
pub struct ChartFeed {
    decimation: u32,
    skipped: u32,
    base_ts: Option<i64>,
    ts_ms: VecDeque<f64>,
    drone_kmh: VecDeque<f64>,
    ball_kmh: VecDeque<f64>,
}

impl ChartFeed {
    /// A feed holding `capacity` samples (at least one), keeping 1 of every
    /// `decimation` incoming snapshots (`decimation` of 0 or 1 keeps
    /// everything). Windows start zero-filled so the chart has a full axis
    /// from frame one.
    pub fn new(capacity: usize, decimation: u32) -> Self {
        let capacity = capacity.max(1);
        ChartFeed {
            decimation: decimation.max(1),
            skipped: 0,
            base_ts: None,
            ts_ms: vec![0.0; capacity].into(),
            drone_kmh: vec![0.0; capacity].into(),
            ball_kmh: vec![0.0; capacity].into(),
        }
    }

    /// Offer a snapshot; returns whether it was accepted into the windows.
    pub fn push(&mut self, snapshot: &SimulationSnapshot) -> bool {
        if self.decimation > 1 {
            self.skipped += 1;
            if self.skipped < self.decimation {
                return false;
            }
            self.skipped = 0;
        }

        let base = *self.base_ts.get_or_insert(snapshot.ts);
        let t_ms = (snapshot.ts - base) as f64 / 1e6;

        self.shift_push(t_ms, display_speeds(snapshot));
        true
    }

    fn shift_push(&mut self, t_ms: f64, (drone, ball): (f64, f64)) {
        for window in [&mut self.ts_ms, &mut self.drone_kmh, &mut self.ball_kmh] {
            window.pop_front();
        }
        self.ts_ms.push_back(t_ms);
        self.drone_kmh.push_back(drone);
        self.ball_kmh.push_back(ball);
    }

    pub fn capacity(&self) -> usize {
        self.ts_ms.len()
    }

    /// Relative timestamps (ms) of the window, oldest first.
    pub fn timestamps(&self) -> Vec<f64> {
        self.ts_ms.iter().copied().collect()
    }

    pub fn drone_speeds(&self) -> Vec<f64> {
        self.drone_kmh.iter().copied().collect()
    }

    pub fn ball_speeds(&self) -> Vec<f64> {
        self.ball_kmh.iter().copied().collect()
    }

    /// Most recent accepted sample as `(t_ms, drone_kmh, ball_kmh)`.
    pub fn latest(&self) -> Option<(f64, f64, f64)> {
        self.base_ts?;
        Some((
            *self.ts_ms.back()?,
            *self.drone_kmh.back()?,
            *self.ball_kmh.back()?,
        ))
    }
}

/// Displayed speeds for drone and ball in km/h.
fn display_speeds(snapshot: &SimulationSnapshot) -> (f64, f64) {
    (
        snapshot.drone_vel.norm() * MS_TO_KMH,
        snapshot.ball_vel.norm() * MS_TO_KMH,
    )
}

//! Chase-camera rig: a ring of camera slots cycled by a debounced action.

use std::time::{Duration, Instant};

use crate::vector::{self, Vec3};

/// Minimum interval between two accepted cycle actions.
pub const CYCLE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Distance the chase camera keeps from its anchor, negative meaning
/// "behind the anchor, away from the look-at target".
pub const CHASE_OFFSET: f64 = -7.0;

/// A camera placement in simulation coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Slot 0 is the free-orbit camera under user control; slots `1..N` are
/// chase anchors that track the drone and look at the ball. Cycling walks
/// `(idx + 1) % N` and is guarded by an explicit debounce timestamp, so two
/// activations inside [`CYCLE_DEBOUNCE`] only advance the rig once.
#[derive(Debug)]
pub struct CameraRig {
    slots: usize,
    idx: usize,
    last_cycle: Option<Instant>,
    free_pose: CameraPose,
    orbit_enabled: bool,
    offset: f64,
}

impl CameraRig {
    /// A rig with the free camera plus `anchors` chase slots.
    pub fn new(anchors: usize) -> Self {
        CameraRig {
            slots: anchors + 1,
            idx: 0,
            last_cycle: None,
            free_pose: CameraPose {
                position: Vec3::new(0.0, -10.0, 5.0),
                look_at: Vec3::ZERO,
            },
            orbit_enabled: true,
            offset: CHASE_OFFSET,
        }
    }

    pub fn index(&self) -> usize {
        self.idx
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Whether user orbit input currently drives the camera (slot 0 only).
    pub fn orbit_enabled(&self) -> bool {
        self.orbit_enabled
    }

    /// The saved free-camera pose, restored whenever slot 0 is re-entered.
    pub fn free_pose(&self) -> CameraPose {
        self.free_pose
    }

    /// Record where the user's orbit camera currently is, so leaving and
    /// re-entering slot 0 does not teleport it.
    pub fn save_free_pose(&mut self, pose: CameraPose) {
        if self.idx == 0 {
            self.free_pose = pose;
        }
    }

    /// Advance to the next slot. Returns false when debounced away.
    pub fn cycle(&mut self) -> bool {
        self.cycle_at(Instant::now())
    }

    /// Debounce-guarded advance with an externally supplied clock reading.
    pub fn cycle_at(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_cycle {
            if now.duration_since(last) < CYCLE_DEBOUNCE {
                return false;
            }
        }
        self.last_cycle = Some(now);

        self.idx = (self.idx + 1) % self.slots;
        self.orbit_enabled = self.idx == 0;
        true
    }

    /// Chase pose for the current slot: the camera sits `offset` along the
    /// instantaneous line from `anchor` toward `look_at`, pointed at
    /// `look_at`. Returns `None` on slot 0, where the orbit camera rules.
    pub fn chase(&self, anchor: Vec3, look_at: Vec3) -> Option<CameraPose> {
        if self.idx == 0 {
            return None;
        }

        let line = vector::line(look_at, anchor);
        if line.dir.norm() == 0.0 {
            // Anchor and target coincide; hold position rather than go NaN.
            return Some(CameraPose {
                position: anchor,
                look_at,
            });
        }

        let t = vector::normalize(self.offset, line.dir);
        Some(CameraPose {
            position: line.point_at(t),
            look_at,
        })
    }
}

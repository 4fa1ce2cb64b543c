//! 3D scene state driven by incoming snapshots.
//!
//! Holds the drone and ball transforms in simulation coordinates (z-up) and
//! converts to the renderer's y-up frame at the edge, mirroring how the
//! browser scene swaps axes when placing objects.

use crate::state::SimulationSnapshot;
use crate::vector::Vec3;
use crate::viewer::camera::{CameraPose, CameraRig};

/// Vertical offset added to the chase camera in the render frame.
pub const CAMERA_LIFT: f64 = 3.0;

/// Simulation (z-up) to render (y-up) coordinates.
pub fn to_render(v: Vec3) -> [f64; 3] {
    [v.x(), v.z(), v.y()]
}

/// Current object transforms, updated wholesale from each snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePose {
    pub drone_pos: Vec3,
    pub drone_ang: Vec3,
    pub ball_pos: Vec3,
}

impl Default for ScenePose {
    fn default() -> Self {
        ScenePose {
            drone_pos: Vec3::ZERO,
            drone_ang: Vec3::ZERO,
            ball_pos: Vec3::ZERO,
        }
    }
}

/// One subscriber's view of the scene: object poses plus the camera rig.
///
/// The chart consumer runs on its own subscription; the two may momentarily
/// render different snapshots and that is fine.
#[derive(Debug)]
pub struct SceneConsumer {
    pose: ScenePose,
    rig: CameraRig,
    camera: Option<CameraPose>,
}

impl SceneConsumer {
    pub fn new(chase_anchors: usize) -> Self {
        SceneConsumer {
            pose: ScenePose::default(),
            rig: CameraRig::new(chase_anchors),
            camera: None,
        }
    }

    /// Apply one snapshot: move drone and ball, recompute the chase camera.
    pub fn apply(&mut self, snapshot: &SimulationSnapshot) {
        self.pose = ScenePose {
            drone_pos: snapshot.drone_pos,
            drone_ang: snapshot.drone_ang,
            ball_pos: snapshot.ball_pos,
        };
        self.camera = self.rig.chase(snapshot.drone_pos, snapshot.ball_pos);
    }

    pub fn pose(&self) -> ScenePose {
        self.pose
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Debounced camera cycle, forwarded to the rig.
    pub fn cycle_camera(&mut self) -> bool {
        let cycled = self.rig.cycle();
        if cycled {
            self.camera = self.rig.chase(self.pose.drone_pos, self.pose.ball_pos);
        }
        cycled
    }

    /// Active chase pose in simulation coordinates; `None` on the free slot.
    pub fn camera(&self) -> Option<CameraPose> {
        self.camera
    }

    /// Where the renderer should place the chase camera (y-up, lifted).
    pub fn camera_render_position(&self) -> Option<[f64; 3]> {
        self.camera.map(|cam| {
            let [x, y, z] = to_render(cam.position);
            [x, y + CAMERA_LIFT, z + CAMERA_LIFT]
        })
    }
}

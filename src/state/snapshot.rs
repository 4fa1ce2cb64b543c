use serde::{Deserialize, Serialize};

use crate::vector::Vec3;

/// One complete simulation state update, the unit transferred end-to-end.
///
/// `ts` is nanoseconds since an arbitrary producer epoch. Producers are
/// expected to send monotonically non-decreasing timestamps but nothing
/// enforces it; the relay forwards whatever arrived last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSnapshot {
    pub ts: i64,
    #[schema(value_type = Vec<f64>)]
    pub drone_pos: Vec3,
    /// Roll, pitch, yaw in radians.
    #[schema(value_type = Vec<f64>)]
    pub drone_ang: Vec3,
    #[schema(value_type = Vec<f64>)]
    pub drone_vel: Vec3,
    #[schema(value_type = Vec<f64>)]
    pub ball_pos: Vec3,
    #[schema(value_type = Vec<f64>)]
    pub ball_vel: Vec3,
}

impl Default for SimulationSnapshot {
    fn default() -> Self {
        SimulationSnapshot {
            ts: 0,
            drone_pos: Vec3::ZERO,
            drone_ang: Vec3::ZERO,
            drone_vel: Vec3::ZERO,
            ball_pos: Vec3::ZERO,
            ball_vel: Vec3::ZERO,
        }
    }
}

impl SimulationSnapshot {
    /// Parse a wire payload, accepting both triple and labeled vector forms.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

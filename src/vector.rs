//! 3-vector algebra for snapshot geometry and the chase camera.
//!
//! Producers may encode a vector either as a triple `[x, y, z]` or as a
//! labeled object `{"x": .., "y": .., "z": ..}`. Both deserialize into the
//! same fixed-size [`Vec3`]; serialization always emits the triple form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VectorError {
    #[error("vector is missing the '{axis}' component")]
    MissingComponent { axis: char },
}

/// A point or direction in simulation space (z-up, meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec3Repr")]
pub struct Vec3(pub [f64; 3]);

/// Wire representations accepted for a vector.
#[derive(Deserialize)]
#[serde(untagged)]
enum Vec3Repr {
    Triple([f64; 3]),
    Labeled {
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    },
}

impl TryFrom<Vec3Repr> for Vec3 {
    type Error = VectorError;

    fn try_from(repr: Vec3Repr) -> Result<Self, Self::Error> {
        match repr {
            Vec3Repr::Triple(components) => Ok(Vec3(components)),
            Vec3Repr::Labeled { x, y, z } => {
                let x = x.ok_or(VectorError::MissingComponent { axis: 'x' })?;
                let y = y.ok_or(VectorError::MissingComponent { axis: 'y' })?;
                let z = z.ok_or(VectorError::MissingComponent { axis: 'z' })?;
                Ok(Vec3([x, y, z]))
            }
        }
    }
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3([0.0; 3]);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3([x, y, z])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn z(&self) -> f64 {
        self.0[2]
    }

    /// Component-wise difference `self - other`.
    pub fn sub(&self, other: Vec3) -> Vec3 {
        Vec3([
            self.0[0] - other.0[0],
            self.0[1] - other.0[1],
            self.0[2] - other.0[2],
        ])
    }

    /// Component-wise sum.
    pub fn add(&self, other: Vec3) -> Vec3 {
        Vec3([
            self.0[0] + other.0[0],
            self.0[1] + other.0[1],
            self.0[2] + other.0[2],
        ])
    }

    /// Scalar multiply.
    pub fn scale(&self, t: f64) -> Vec3 {
        Vec3([self.0[0] * t, self.0[1] * t, self.0[2] * t])
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        (self.0[0] * self.0[0] + self.0[1] * self.0[1] + self.0[2] * self.0[2]).sqrt()
    }
}

/// Scale factor that walks a distance of `n` along `v`: `n / norm(v)`.
pub fn normalize(n: f64, v: Vec3) -> f64 {
    n / v.norm()
}

/// Parametric line `origin + t * dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// The line through `p0` and `p1`, anchored at `p0`.
pub fn line(p1: Vec3, p0: Vec3) -> Line {
    Line {
        origin: p0,
        dir: p1.sub(p0),
    }
}

impl Line {
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.origin.add(self.dir.scale(t))
    }
}

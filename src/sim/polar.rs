//! Angle + speed velocity representation
//!
//! Angles are degrees, 0° along +X, counterclockwise positive.

use serde::{Deserialize, Serialize};

use super::vector::Vector2D;
use crate::polar_to_cartesian;

/// A velocity expressed as a heading and a magnitude
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarVector {
    /// Heading in degrees
    pub angle_degrees: f64,
    pub speed: f64,
}

impl PolarVector {
    pub const fn new(angle_degrees: f64, speed: f64) -> Self {
        Self {
            angle_degrees,
            speed,
        }
    }

    pub fn from_vector(v: Vector2D) -> Self {
        v.to_polar()
    }

    pub fn to_vector(self) -> Vector2D {
        polar_to_cartesian(self.angle_degrees, self.speed).into()
    }
}

impl From<Vector2D> for PolarVector {
    fn from(v: Vector2D) -> Self {
        Self::from_vector(v)
    }
}

impl From<PolarVector> for Vector2D {
    fn from(p: PolarVector) -> Self {
        p.to_vector()
    }
}

//! Cartesian 2D vector value type
//!
//! Velocities use math orientation (Y up). Every operation returns a new
//! value. Bounces are expressed against a *surface direction* (the direction a
//! flat boundary runs along) plus the surface's own velocity, so a moving
//! paddle and a static wall go through the same code.

use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::polar::PolarVector;
use crate::cartesian_to_polar;

/// A 2D vector in f64
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn add(self, other: Self) -> Self {
        (self.as_dvec2() + other.as_dvec2()).into()
    }

    pub fn subtract(self, other: Self) -> Self {
        (self.as_dvec2() - other.as_dvec2()).into()
    }

    pub fn scale(self, k: f64) -> Self {
        (self.as_dvec2() * k).into()
    }

    pub fn dot(self, other: Self) -> f64 {
        self.as_dvec2().dot(other.as_dvec2())
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or zero for the zero vector
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / len, self.y / len)
    }

    /// Swap the components: `{x, y} -> {y, x}`
    ///
    /// This is a mirror across the line y = x, not a 90° rotation. Surface
    /// directions are chosen so the mirror yields the normal facing the ball
    /// (floor `{1,0}` -> `{0,1}`, ceiling `{-1,0}` -> `{0,-1}`), and the
    /// bounce code depends on exactly this mapping.
    pub fn perpendicular(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Angle (degrees) and magnitude of this vector
    pub fn to_polar(self) -> PolarVector {
        let (angle_degrees, speed) = cartesian_to_polar(self.into());
        PolarVector::new(angle_degrees, speed)
    }

    /// Elastic bounce off a surface moving with `surface_velocity`
    ///
    /// The normal component of the velocity relative to the surface is
    /// negated; the tangential component is kept.
    pub fn reflect(self, surface_direction: Self, surface_velocity: Self) -> Self {
        let n_hat = surface_direction.perpendicular().normalize();
        let v_rel = self - surface_velocity;
        let vn = v_rel.dot(n_hat);
        let reflected = v_rel - n_hat * (2.0 * vn);
        reflected + surface_velocity
    }

    /// Bounce that also transfers part of the surface's tangential motion
    ///
    /// `k` is the tangential impulse gain: 0 behaves like [`Vector2D::reflect`],
    /// 0.5 lets a sliding paddle steer the ball.
    pub fn reflect_with_tangential_impulse(
        self,
        surface_direction: Self,
        surface_velocity: Self,
        k: f64,
    ) -> Self {
        let n = surface_direction.perpendicular().normalize();
        let t = Self::new(-n.y, n.x);

        let v_rel = self - surface_velocity;
        let vn = n * v_rel.dot(n);
        let vt = t * v_rel.dot(t);

        // Surface speed along the tangent, scaled by the gain
        let impulse = t * (k * surface_velocity.dot(t));

        -vn + (vt + impulse) + surface_velocity
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        v.as_dvec2()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

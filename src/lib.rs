//! Paddle Ball - simulation core for a ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vector math, collisions, game phases)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input polling and window management live outside this crate.
//! A frontend owns a [`sim::GameState`], feeds one [`sim::TickInput`] per frame
//! to [`sim::tick`] and draws from the state's accessors.

pub mod sim;
pub mod tuning;

pub use sim::{GameState, PolarVector, TickInput, Vector2D, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Assumed frame rate. Speeds below are pixels per tick at this rate.
    pub const TICK_RATE_HZ: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 60;
    pub const PADDLE_HEIGHT: i32 = 10;
    /// Paddle sits at 80% of the grid height
    pub const PADDLE_RELATIVE_POSITION: f64 = 0.8;
    /// Pixels the paddle moves per tick of held input
    pub const PADDLE_STEP: i32 = 5;
    /// Fraction of paddle motion transferred onto the ball on contact
    pub const PADDLE_IMPULSE_GAIN: f64 = 0.5;
    /// Shallowest heading (degrees above horizontal) a paddle bounce may leave at
    pub const MIN_BOUNCE_ANGLE: f64 = 15.0;

    /// Ball defaults
    pub const BALL_DIAMETER: i32 = 10;
    pub const BALL_BASE_SPEED: f64 = 4.0;
    /// Linear difficulty ramp applied per level above 1
    pub const SPEED_INCREMENT_PER_LEVEL: f64 = 0.3;
    /// Launch angle range (degrees, Y up)
    pub const LAUNCH_ANGLE_MIN: f64 = 30.0;
    pub const LAUNCH_ANGLE_MAX: f64 = 75.0;

    /// Round rules
    pub const STARTING_LIVES: u32 = 3;
    pub const SCORE_PER_LEVEL: u32 = 10;
    pub const WINNING_LEVEL: u32 = 10;
}

/// Convert a heading (degrees, Y up) and magnitude to a cartesian vector
#[inline]
pub fn polar_to_cartesian(angle_degrees: f64, magnitude: f64) -> glam::DVec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    glam::DVec2::new(magnitude * cos, magnitude * sin)
}

/// Convert a cartesian vector to (heading in degrees, magnitude)
#[inline]
pub fn cartesian_to_polar(v: glam::DVec2) -> (f64, f64) {
    (v.y.atan2(v.x).to_degrees(), v.length())
}

/// Normalize an angle in degrees to [-180, 180)
///
/// Non-finite input yields NaN.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to the modulus for tiny negative remainders
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

//! Trajectory stepping and collision response
//!
//! The ball is stepped once per tick by its full displacement (no swept
//! test), clamped back inside the grid, then checked against the paddle's
//! bounding box. Positions are screen space (Y down); velocities are math
//! space (Y up), so a displacement `d` moves the ball by `(d.x, -d.y)`.

use serde::{Deserialize, Serialize};

use super::polar::PolarVector;
use super::state::{Ball, Paddle};
use super::vector::Vector2D;
use crate::normalize_degrees;
use crate::tuning::Tuning;

/// Left and right walls run vertically
pub const SIDE_WALL_SURFACE: Vector2D = Vector2D::new(0.0, 1.0);
/// Direction chosen so the mirrored normal points down, into the grid
pub const CEILING_SURFACE: Vector2D = Vector2D::new(-1.0, 0.0);
/// Top face of the paddle; the mirrored normal points up
pub const PADDLE_SURFACE: Vector2D = Vector2D::new(1.0, 0.0);

/// What the ball ran into during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionKind {
    #[default]
    None,
    Wall,
    Paddle,
}

/// Playfield size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Outcome of stepping the ball one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Corrected top-left of the ball
    pub position: Vector2D,
    /// Heading after any bounces (unchanged when nothing was hit)
    pub angle_degrees: f64,
    /// Last collision detected; paddle wins over walls
    pub kind: CollisionKind,
}

/// Ball speed for a level: linear ramp above level 1
#[inline]
pub fn effective_speed(base_speed: f64, level: u32, increment_per_level: f64) -> f64 {
    base_speed + level.saturating_sub(1) as f64 * increment_per_level
}

/// Keep an upward heading at least `min_angle` degrees off the horizontal
#[inline]
pub fn clamp_bounce_angle(angle_degrees: f64, min_angle: f64) -> f64 {
    angle_degrees.clamp(min_angle, 180.0 - min_angle)
}

/// Step the ball along its heading and resolve wall and paddle contacts
///
/// Each contact reflects the tick's velocity exactly once: side walls and the
/// ceiling are static surfaces, the paddle passes its last movement as the
/// surface velocity with `paddle_impulse_gain` of it transferred
/// tangentially. The floor never bounces; a ball that reaches it is clamped
/// and left there for the caller to count as a miss.
pub fn advance_ball(
    ball: &Ball,
    paddle: &Paddle,
    bounds: Bounds,
    level: u32,
    tuning: &Tuning,
) -> CollisionResult {
    let speed = effective_speed(ball.speed, level, tuning.speed_increment_per_level);
    let mut velocity = PolarVector::new(ball.angle_degrees, speed).to_vector();
    let diameter = ball.diameter as f64;

    let mut pos = Vector2D::new(
        ball.position.x + velocity.x,
        ball.position.y - velocity.y,
    );
    let mut kind = CollisionKind::None;

    // Side walls
    if pos.x < 0.0 {
        pos.x = 0.0;
        kind = CollisionKind::Wall;
        velocity = velocity.reflect(SIDE_WALL_SURFACE, Vector2D::ZERO);
    } else if pos.x + diameter > bounds.width {
        pos.x = bounds.width - diameter;
        kind = CollisionKind::Wall;
        velocity = velocity.reflect(SIDE_WALL_SURFACE, Vector2D::ZERO);
    }

    // Ceiling bounces, floor only clamps
    if pos.y < 0.0 {
        pos.y = 0.0;
        kind = CollisionKind::Wall;
        velocity = velocity.reflect(CEILING_SURFACE, Vector2D::ZERO);
    } else if pos.y + diameter > bounds.height {
        pos.y = bounds.height - diameter;
    }

    if overlaps_paddle(pos, diameter, paddle) {
        // Rest on top of the paddle instead of sinking into it
        pos.y = paddle.y as f64 - diameter;
        kind = CollisionKind::Paddle;
        velocity = velocity.reflect_with_tangential_impulse(
            PADDLE_SURFACE,
            paddle.movement,
            tuning.paddle_impulse_gain,
        );
    }

    let angle_degrees = match kind {
        CollisionKind::None => ball.angle_degrees,
        CollisionKind::Wall => normalize_degrees(velocity.to_polar().angle_degrees),
        CollisionKind::Paddle => {
            clamp_bounce_angle(velocity.to_polar().angle_degrees, tuning.min_bounce_angle)
        }
    };

    CollisionResult {
        position: pos,
        angle_degrees,
        kind,
    }
}

/// Bounding-box test between the ball's bottom edge and the paddle band
pub fn overlaps_paddle(pos: Vector2D, diameter: f64, paddle: &Paddle) -> bool {
    let left = paddle.x as f64;
    let right = (paddle.x + paddle.width) as f64;
    let top = paddle.y as f64;
    let bottom = (paddle.y + paddle.height) as f64;
    let ball_bottom = pos.y + diameter;

    pos.x + diameter >= left && pos.x <= right && ball_bottom >= top && ball_bottom <= bottom
}

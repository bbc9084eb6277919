//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, speeds in pixels per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod polar;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{
    Bounds, CollisionKind, CollisionResult, advance_ball, clamp_bounce_angle,
    effective_speed,
};
pub use polar::PolarVector;
pub use state::{
    Ball, Direction, GameEvent, GameOutcome, GamePhase, GameState, Paddle, RngState, RoundState,
};
pub use tick::{TickInput, tick};
pub use vector::Vector2D;

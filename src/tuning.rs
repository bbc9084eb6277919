//! Data-driven game balance
//!
//! Every field defaults to the value in [`crate::consts`], so a tuning file
//! only needs the keys it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning value: {0}")]
    Invalid(String),
}

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Paddle Y as a fraction of grid height
    pub paddle_relative_position: f64,
    /// Pixels per tick of held input
    pub paddle_step: i32,
    /// Tangential impulse gain applied on paddle bounces
    pub paddle_impulse_gain: f64,
    /// Paddle bounces are kept at least this many degrees above horizontal
    pub min_bounce_angle: f64,

    pub ball_diameter: i32,
    /// Ball speed at level 1 (pixels per tick)
    pub ball_base_speed: f64,
    pub speed_increment_per_level: f64,
    pub launch_angle_min: f64,
    pub launch_angle_max: f64,

    pub starting_lives: u32,
    /// Paddle hits needed per level-up
    pub score_per_level: u32,
    /// Reaching this level wins the round
    pub winning_level: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_relative_position: PADDLE_RELATIVE_POSITION,
            paddle_step: PADDLE_STEP,
            paddle_impulse_gain: PADDLE_IMPULSE_GAIN,
            min_bounce_angle: MIN_BOUNCE_ANGLE,

            ball_diameter: BALL_DIAMETER,
            ball_base_speed: BALL_BASE_SPEED,
            speed_increment_per_level: SPEED_INCREMENT_PER_LEVEL,
            launch_angle_min: LAUNCH_ANGLE_MIN,
            launch_angle_max: LAUNCH_ANGLE_MAX,

            starting_lives: STARTING_LIVES,
            score_per_level: SCORE_PER_LEVEL,
            winning_level: WINNING_LEVEL,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check ranges that the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.paddle_width <= 0 || self.paddle_height <= 0 {
            return Err(TuningError::Invalid(format!(
                "paddle size must be positive, got {}x{}",
                self.paddle_width, self.paddle_height
            )));
        }
        if self.ball_diameter <= 0 {
            return Err(TuningError::Invalid(format!(
                "ball diameter must be positive, got {}",
                self.ball_diameter
            )));
        }
        if !(0.0..1.0).contains(&self.paddle_relative_position) {
            return Err(TuningError::Invalid(format!(
                "paddle_relative_position must be in [0, 1), got {}",
                self.paddle_relative_position
            )));
        }
        if self.paddle_step < 0 || self.paddle_step >= self.paddle_width {
            return Err(TuningError::Invalid(format!(
                "paddle_step must be in [0, paddle_width), got {}",
                self.paddle_step
            )));
        }
        if !(0.0..=1.0).contains(&self.paddle_impulse_gain) {
            return Err(TuningError::Invalid(format!(
                "paddle_impulse_gain must be in [0, 1], got {}",
                self.paddle_impulse_gain
            )));
        }
        if !(0.0..90.0).contains(&self.min_bounce_angle) {
            return Err(TuningError::Invalid(format!(
                "min_bounce_angle must be in [0, 90), got {}",
                self.min_bounce_angle
            )));
        }
        let speeds = [self.ball_base_speed, self.speed_increment_per_level];
        if speeds.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(TuningError::Invalid(
                "ball speeds must be finite and non-negative".to_string(),
            ));
        }
        // Launches must leave upward: both bounds strictly above the horizontal
        if !(self.launch_angle_min > 0.0
            && self.launch_angle_min <= self.launch_angle_max
            && self.launch_angle_max < 180.0)
        {
            return Err(TuningError::Invalid(format!(
                "launch angles must satisfy 0 < min <= max < 180, got {}..={}",
                self.launch_angle_min, self.launch_angle_max
            )));
        }
        if self.starting_lives == 0 || self.score_per_level == 0 || self.winning_level == 0 {
            return Err(TuningError::Invalid(
                "starting_lives, score_per_level and winning_level must be at least 1"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

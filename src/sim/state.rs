//! Game state and core simulation types
//!
//! A single [`GameState`] owns the paddle, the ball, the round counters and
//! the current phase. The frontend holds it exclusively and advances it with
//! [`crate::sim::tick`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{self, Bounds, CollisionKind};
use super::vector::Vector2D;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Splash,
    /// Round in progress, ball not yet launched
    WaitForLaunch,
    /// Ball in play
    Running,
    /// Round ended (won or lost), waiting for restart
    Over,
}

impl GamePhase {
    /// Decode a phase handed over as a raw code by an outer layer
    ///
    /// # Panics
    /// On an unknown code. Callers must only pass codes they got from
    /// [`GamePhase::code`].
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => GamePhase::Splash,
            1 => GamePhase::WaitForLaunch,
            2 => GamePhase::Running,
            3 => GamePhase::Over,
            _ => panic!("unrecognized game phase code {code}"),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            GamePhase::Splash => 0,
            GamePhase::WaitForLaunch => 1,
            GamePhase::Running => 2,
            GamePhase::Over => 3,
        }
    }
}

/// Horizontal paddle input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

impl Direction {
    /// Decode a direction handed over as a raw code by an outer layer
    ///
    /// # Panics
    /// On an unknown code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Direction::None,
            1 => Direction::Left,
            2 => Direction::Right,
            _ => panic!("unrecognized direction code {code}"),
        }
    }
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Lost,
}

/// Things that happened during a tick, for sound/HUD hooks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Round (re)started from Splash or Over
    RoundStarted,
    /// Ball put in play at the given heading
    Launched { angle_degrees: f64 },
    WallHit,
    PaddleHit { score: u32 },
    LevelUp { level: u32 },
    /// Ball passed the paddle; lives left after the loss
    LifeLost { lives: u32 },
    GameOver { outcome: GameOutcome },
    /// Quit asked for from Splash or Over; the frontend should exit
    QuitRequested,
}

/// The ball. Position is the top-left of its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vector2D,
    /// Heading in degrees, Y up
    pub angle_degrees: f64,
    /// Base speed in pixels per tick (before the level ramp)
    pub speed: f64,
    pub diameter: i32,
}

impl Ball {
    pub fn bottom(&self) -> f64 {
        self.position.y + self.diameter as f64
    }

    pub fn center_x(&self) -> f64 {
        self.position.x + self.diameter as f64 / 2.0
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: i32,
    /// Fixed for the session
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Displacement applied by the last move, used as surface velocity
    pub movement: Vector2D,
}

impl Paddle {
    pub fn center_x(&self) -> f64 {
        self.x as f64 + self.width as f64 / 2.0
    }

    /// Move by `dx` and clamp into `[0, grid_width - width]`
    fn shift(&mut self, dx: i32, grid_width: i32) {
        let before = self.x;
        self.x = self.x.saturating_add(dx).clamp(0, grid_width - self.width);
        self.movement = Vector2D::new((self.x - before) as f64, 0.0);
    }
}

/// Lives, score and level of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub lives: u32,
    pub score: u32,
    pub level: u32,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Number of draws taken so far
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next draw; each call yields an independent stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let mixed = self
            .seed
            .wrapping_add(self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.stream += 1;
        Pcg32::seed_from_u64(mixed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    grid_width: i32,
    grid_height: i32,
    tuning: Tuning,
    /// RNG state for launch angles
    pub rng_state: RngState,
    pub(crate) phase: GamePhase,
    pub(crate) round: RoundState,
    pub(crate) outcome: Option<GameOutcome>,
    pub(crate) paddle: Paddle,
    pub(crate) ball: Ball,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
}

impl GameState {
    /// Create a game on a `grid_width` x `grid_height` pixel grid with default tuning
    pub fn new(grid_width: i32, grid_height: i32, seed: u64) -> Self {
        Self::with_tuning(grid_width, grid_height, seed, Tuning::default())
    }

    /// Create a game with custom tuning
    ///
    /// # Panics
    /// If the tuning is invalid or the grid cannot hold the paddle and ball.
    pub fn with_tuning(grid_width: i32, grid_height: i32, seed: u64, tuning: Tuning) -> Self {
        if let Err(err) = tuning.validate() {
            panic!("invalid tuning: {err}");
        }
        let paddle_y = (grid_height as f64 * tuning.paddle_relative_position) as i32;
        assert!(
            grid_width >= tuning.paddle_width && grid_width >= tuning.ball_diameter,
            "grid width {grid_width} too narrow for paddle and ball"
        );
        assert!(
            paddle_y >= tuning.ball_diameter && paddle_y + tuning.paddle_height <= grid_height,
            "grid height {grid_height} cannot fit the ball above the paddle"
        );

        let paddle = Paddle {
            x: 0,
            y: paddle_y,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            movement: Vector2D::ZERO,
        };
        let ball = Ball {
            position: Vector2D::ZERO,
            angle_degrees: 0.0,
            speed: 0.0,
            diameter: tuning.ball_diameter,
        };

        let mut state = Self {
            grid_width,
            grid_height,
            round: RoundState {
                lives: tuning.starting_lives,
                score: 0,
                level: 1,
            },
            tuning,
            rng_state: RngState::new(seed),
            phase: GamePhase::Splash,
            outcome: None,
            paddle,
            ball,
            time_ticks: 0,
        };
        state.center_paddle();
        state.put_ball_in_middle();
        state
    }

    /// Reset lives, score and level for a fresh round
    pub fn initialize(&mut self) {
        self.round = RoundState {
            lives: self.tuning.starting_lives,
            score: 0,
            level: 1,
        };
        self.outcome = None;
    }

    pub fn center_paddle(&mut self) {
        self.paddle.x = (self.grid_width - self.paddle.width) / 2;
        self.paddle.movement = Vector2D::ZERO;
    }

    /// Place the ball horizontally mid-grid, halfway between ceiling and paddle
    pub fn put_ball_in_middle(&mut self) {
        let x = self.grid_width / 2 + self.ball.diameter / 2;
        let y = self.paddle.y / 2 + self.paddle.height / 2;
        self.ball.position = Vector2D::new(x as f64, y as f64);
    }

    /// Give the ball a random heading between the launch angles, at base speed
    ///
    /// Launch angles sit above the horizontal, so the ball always leaves
    /// upward.
    pub fn set_random_upward_vector(&mut self) {
        let mut rng = self.rng_state.next_rng();
        let angle = rng.random_range(self.tuning.launch_angle_min..=self.tuning.launch_angle_max);
        self.ball.angle_degrees = angle;
        self.ball.speed = self.tuning.ball_base_speed;
    }

    /// Apply one tick of horizontal input; the paddle stays inside the grid
    pub fn move_paddle(&mut self, direction: Direction) {
        let step = self.tuning.paddle_step;
        let dx = match direction {
            Direction::Left => -step,
            Direction::Right => step,
            Direction::None => 0,
        };
        self.paddle.shift(dx, self.grid_width);
    }

    /// Step the ball one tick and resolve collisions
    ///
    /// # Panics
    /// When called outside [`GamePhase::Running`].
    pub fn advance_ball(&mut self) -> CollisionKind {
        assert_eq!(
            self.phase,
            GamePhase::Running,
            "ball can only move while running"
        );

        let result = collision::advance_ball(
            &self.ball,
            &self.paddle,
            Bounds {
                width: self.grid_width as f64,
                height: self.grid_height as f64,
            },
            self.round.level,
            &self.tuning,
        );

        if result.kind != CollisionKind::None {
            log::debug!(
                "{:?} collision at ({:.1}, {:.1}), heading {:.2} -> {:.2}",
                result.kind,
                result.position.x,
                result.position.y,
                self.ball.angle_degrees,
                result.angle_degrees
            );
        }

        self.ball.position = result.position;
        self.ball.angle_degrees = result.angle_degrees;
        result.kind
    }

    /// True once the ball's bottom edge has reached the floor
    pub fn ball_past_paddle(&self) -> bool {
        self.ball.bottom() >= self.grid_height as f64
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_position(&self) -> Vector2D {
        self.ball.position
    }

    pub fn ball_angle(&self) -> f64 {
        self.ball.angle_degrees
    }

    pub fn ball_speed(&self) -> f64 {
        self.ball.speed
    }

    pub fn ball_diameter(&self) -> i32 {
        self.ball.diameter
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn paddle_position(&self) -> (i32, i32) {
        (self.paddle.x, self.paddle.y)
    }

    pub fn paddle_size(&self) -> (i32, i32) {
        (self.paddle.width, self.paddle.height)
    }

    pub fn grid_size(&self) -> (i32, i32) {
        (self.grid_width, self.grid_height)
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn lives(&self) -> u32 {
        self.round.lives
    }

    pub fn level(&self) -> u32 {
        self.round.level
    }

    pub fn round(&self) -> RoundState {
        self.round
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Won/Lost once the phase is Over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn new_state() -> GameState {
        GameState::new(800, 600, 12345)
    }

    #[test]
    fn test_new_state_layout() {
        let state = new_state();
        assert_eq!(state.phase(), GamePhase::Splash);
        assert_eq!(state.lives(), 3);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.paddle_position(), (370, 480));
        assert_eq!(state.paddle_size(), (PADDLE_WIDTH, PADDLE_HEIGHT));
        assert_eq!(state.ball_position(), Vector2D::new(405.0, 245.0));
    }

    #[test]
    fn test_paddle_clamped_left() {
        let mut state = new_state();
        for _ in 0..500 {
            state.move_paddle(Direction::Left);
            assert!(state.paddle().x >= 0);
        }
        assert_eq!(state.paddle().x, 0);
        // Pinned against the wall: no motion to transfer
        assert_eq!(state.paddle().movement, Vector2D::ZERO);
    }

    #[test]
    fn test_paddle_clamped_right() {
        let mut state = new_state();
        for _ in 0..500 {
            state.move_paddle(Direction::Right);
            assert!(state.paddle().x <= 800 - PADDLE_WIDTH);
        }
        assert_eq!(state.paddle().x, 800 - PADDLE_WIDTH);
    }

    #[test]
    fn test_paddle_movement_vector() {
        let mut state = new_state();
        state.move_paddle(Direction::Right);
        assert_eq!(state.paddle().movement, Vector2D::new(5.0, 0.0));
        state.move_paddle(Direction::Left);
        assert_eq!(state.paddle().movement, Vector2D::new(-5.0, 0.0));
        state.move_paddle(Direction::None);
        assert_eq!(state.paddle().movement, Vector2D::ZERO);
        assert_eq!(state.paddle().x, 370);
    }

    #[test]
    fn test_initialize_resets_round() {
        let mut state = new_state();
        state.round = RoundState {
            lives: 1,
            score: 42,
            level: 5,
        };
        state.outcome = Some(GameOutcome::Lost);
        state.initialize();
        assert_eq!(state.lives(), 3);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_random_upward_vector_in_range() {
        let mut state = new_state();
        for _ in 0..200 {
            state.set_random_upward_vector();
            let angle = state.ball_angle();
            assert!((LAUNCH_ANGLE_MIN..=LAUNCH_ANGLE_MAX).contains(&angle));
            assert_eq!(state.ball_speed(), BALL_BASE_SPEED);
        }
    }

    #[test]
    fn test_custom_launch_range_still_upward() {
        let tuning = Tuning {
            launch_angle_min: 100.0,
            launch_angle_max: 170.0,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(800, 600, 99, tuning);
        for _ in 0..200 {
            state.set_random_upward_vector();
            assert!((100.0..=170.0).contains(&state.ball_angle()));
        }
    }

    #[test]
    #[should_panic(expected = "invalid tuning")]
    fn test_oversized_paddle_step_rejected() {
        let tuning = Tuning {
            paddle_step: i32::MAX,
            ..Default::default()
        };
        GameState::with_tuning(800, 600, 1, tuning);
    }

    #[test]
    fn test_launch_angles_deterministic_per_seed() {
        let mut a = GameState::new(800, 600, 7);
        let mut b = GameState::new(800, 600, 7);
        let mut c = GameState::new(800, 600, 8);
        let mut differs = false;
        for _ in 0..10 {
            a.set_random_upward_vector();
            b.set_random_upward_vector();
            c.set_random_upward_vector();
            assert_eq!(a.ball_angle(), b.ball_angle());
            differs |= a.ball_angle() != c.ball_angle();
        }
        assert!(differs);
    }

    #[test]
    fn test_paddle_shift_saturates() {
        let mut state = new_state();
        state.paddle.shift(i32::MAX, 800);
        assert_eq!(state.paddle().x, 800 - PADDLE_WIDTH);
        state.paddle.shift(i32::MIN, 800);
        assert_eq!(state.paddle().x, 0);
        assert_eq!(state.paddle().movement, Vector2D::new(-740.0, 0.0));
    }

    #[test]
    fn test_widest_valid_step_stays_in_grid() {
        let tuning = Tuning {
            paddle_step: PADDLE_WIDTH - 1,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(800, 600, 1, tuning);
        for _ in 0..50 {
            state.move_paddle(Direction::Right);
        }
        assert_eq!(state.paddle().x, 800 - PADDLE_WIDTH);
    }

    #[test]
    #[should_panic(expected = "ball can only move while running")]
    fn test_advance_ball_requires_running() {
        let mut state = new_state();
        state.advance_ball();
    }

    #[test]
    #[should_panic(expected = "unrecognized direction")]
    fn test_unknown_direction_code_panics() {
        Direction::from_code(9);
    }

    #[test]
    #[should_panic(expected = "unrecognized game phase")]
    fn test_unknown_phase_code_panics() {
        GamePhase::from_code(4);
    }

    #[test]
    fn test_codes_round_trip() {
        for phase in [
            GamePhase::Splash,
            GamePhase::WaitForLaunch,
            GamePhase::Running,
            GamePhase::Over,
        ] {
            assert_eq!(GamePhase::from_code(phase.code()), phase);
        }
        assert_eq!(Direction::from_code(1), Direction::Left);
        assert_eq!(Direction::from_code(2), Direction::Right);
        assert_eq!(Direction::from_code(0), Direction::None);
    }

    #[test]
    #[should_panic(expected = "too narrow")]
    fn test_grid_too_small_panics() {
        GameState::new(40, 600, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = new_state();
        state.set_random_upward_vector();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase(), state.phase());
        assert_eq!(back.paddle_position(), state.paddle_position());
        assert_eq!(back.rng_state.stream, 1);
    }
}

//! Per-frame simulation tick
//!
//! Drives the phase machine: Splash -> WaitForLaunch -> Running -> Over, with
//! Running falling back to WaitForLaunch after a lost life.

use super::collision::CollisionKind;
use super::state::{Direction, GameEvent, GameOutcome, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle direction held this tick (the input layer resolves conflicts)
    pub direction: Direction,
    /// Launch the ball (space)
    pub launch: bool,
    /// Start / restart from Splash or Over (enter)
    pub start: bool,
    /// Quit from Splash or Over (escape)
    pub quit: bool,
    /// Idle/demo mode - AI plays the game
    pub autopilot: bool,
}

/// Advance the game state by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Splash | GamePhase::Over => {
            if input.start {
                start_round(state, &mut events);
            } else if input.quit {
                log::info!("Quit requested from {:?}", state.phase);
                events.push(GameEvent::QuitRequested);
            }
        }

        GamePhase::WaitForLaunch => {
            if input.launch || input.autopilot {
                launch(state, &mut events);
            }
        }

        GamePhase::Running => {
            let direction = if input.autopilot {
                autopilot_direction(state)
            } else {
                input.direction
            };
            state.move_paddle(direction);

            match state.advance_ball() {
                CollisionKind::Paddle => on_paddle_hit(state, &mut events),
                CollisionKind::Wall => events.push(GameEvent::WallHit),
                CollisionKind::None => {}
            }

            if state.phase == GamePhase::Running && state.ball_past_paddle() {
                on_ball_lost(state, &mut events);
            }

            log::trace!(
                "tick {}: ball ({:.1}, {:.1}) paddle x {}",
                state.time_ticks,
                state.ball.position.x,
                state.ball.position.y,
                state.paddle.x
            );
        }
    }

    events
}

fn start_round(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.initialize();
    enter_wait_for_launch(state);
    log::info!("Round started");
    events.push(GameEvent::RoundStarted);
}

fn enter_wait_for_launch(state: &mut GameState) {
    state.center_paddle();
    state.phase = GamePhase::WaitForLaunch;
}

fn launch(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.center_paddle();
    state.put_ball_in_middle();
    state.set_random_upward_vector();
    state.phase = GamePhase::Running;

    let angle_degrees = state.ball_angle();
    log::debug!("Ball launched at {:.2} degrees", angle_degrees);
    events.push(GameEvent::Launched { angle_degrees });
}

fn on_paddle_hit(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.round.score += 1;
    events.push(GameEvent::PaddleHit {
        score: state.round.score,
    });

    if state.round.score % state.tuning().score_per_level == 0 {
        state.round.level += 1;
        log::info!("Level up: {}", state.round.level);
        events.push(GameEvent::LevelUp {
            level: state.round.level,
        });
    }

    if state.round.level >= state.tuning().winning_level {
        game_over(state, GameOutcome::Won, events);
    }
}

fn on_ball_lost(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.round.lives = state.round.lives.saturating_sub(1);
    log::info!("Ball lost, {} lives left", state.round.lives);
    events.push(GameEvent::LifeLost {
        lives: state.round.lives,
    });

    if state.round.lives == 0 {
        game_over(state, GameOutcome::Lost, events);
    } else {
        enter_wait_for_launch(state);
    }
}

fn game_over(state: &mut GameState, outcome: GameOutcome, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::Over;
    state.outcome = Some(outcome);
    log::info!(
        "Game over ({:?}): score {}, level {}",
        outcome,
        state.round.score,
        state.round.level
    );
    events.push(GameEvent::GameOver { outcome });
}

/// Track the ball with the paddle center
///
/// A slow oscillating offset makes the ball land on different parts of the
/// paddle so rallies don't settle into a loop.
fn autopilot_direction(state: &GameState) -> Direction {
    let time_factor = state.time_ticks as f64 * 0.01;
    let wobble =
        (time_factor.sin() * 0.2 + (time_factor * 0.7).sin() * 0.1) * state.paddle.width as f64;

    let target = state.ball.center_x() + wobble;
    let dead_zone = state.tuning().paddle_step as f64;
    let delta = target - state.paddle.center_x();

    if delta < -dead_zone {
        Direction::Left
    } else if delta > dead_zone {
        Direction::Right
    } else {
        Direction::None
    }
}

//! Whole-session checks driven only through the public API

use paddle_ball::sim::{GameEvent, GameOutcome, GamePhase, GameState, TickInput, tick};
use paddle_ball::{Tuning, consts};

fn autopilot() -> TickInput {
    TickInput {
        start: true,
        autopilot: true,
        ..Default::default()
    }
}

fn assert_in_bounds(state: &GameState) {
    let (width, height) = state.grid_size();
    let (paddle_x, _) = state.paddle_position();
    let (paddle_w, _) = state.paddle_size();
    assert!(paddle_x >= 0 && paddle_x <= width - paddle_w);

    let pos = state.ball_position();
    let d = state.ball_diameter() as f64;
    assert!(pos.x >= 0.0 && pos.x + d <= width as f64, "ball x out of grid: {pos:?}");
    assert!(pos.y >= 0.0 && pos.y + d <= height as f64, "ball y out of grid: {pos:?}");
}

#[test]
fn autopilot_session_keeps_invariants() {
    let mut state = GameState::new(800, 600, 2024);
    let mut paddle_hits = 0u32;
    let mut lives_lost = 0u32;

    for _ in 0..20_000 {
        let events = tick(&mut state, &autopilot());
        for event in &events {
            match event {
                GameEvent::PaddleHit { score } => {
                    paddle_hits += 1;
                    assert_eq!(*score, state.score());
                }
                GameEvent::LifeLost { .. } => lives_lost += 1,
                _ => {}
            }
        }
        if state.phase() == GamePhase::Running {
            assert_in_bounds(&state);
            assert!(state.ball_speed() >= 0.0);
        }
        assert!(state.level() >= 1);
        if state.phase() == GamePhase::Over {
            break;
        }
    }

    assert!(paddle_hits > 0, "autopilot never returned the ball");
    if state.phase() != GamePhase::Over {
        assert_eq!(state.lives(), consts::STARTING_LIVES - lives_lost);
    }
}

#[test]
fn level_follows_score_threshold() {
    let tuning = Tuning {
        score_per_level: 2,
        winning_level: 4,
        ..Default::default()
    };
    let mut state = GameState::with_tuning(800, 600, 5, tuning);

    for _ in 0..200_000 {
        tick(&mut state, &autopilot());
        if state.phase() == GamePhase::Over {
            break;
        }
        assert_eq!(state.level(), 1 + state.score() / 2);
    }

    // A finished round was either won at level 4 or lost on lives
    match state.outcome() {
        Some(GameOutcome::Won) => assert_eq!(state.level(), 4),
        Some(GameOutcome::Lost) => assert_eq!(state.lives(), 0),
        None => assert_ne!(state.phase(), GamePhase::Over),
    }
}

#[test]
fn quit_is_reported_only_outside_play() {
    let mut state = GameState::new(800, 600, 3);
    let quit = TickInput {
        quit: true,
        ..Default::default()
    };
    assert_eq!(tick(&mut state, &quit), vec![GameEvent::QuitRequested]);

    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );
    assert!(tick(&mut state, &quit).is_empty());
    assert_eq!(state.phase(), GamePhase::WaitForLaunch);
}

#[test]
fn same_seed_same_game() {
    let run = |seed| {
        let mut state = GameState::new(640, 480, seed);
        let mut log = Vec::new();
        for _ in 0..5_000 {
            log.extend(tick(&mut state, &autopilot()));
        }
        (log, state.score(), state.lives())
    };
    assert_eq!(run(77), run(77));
}

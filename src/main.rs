//! Paddle Ball headless driver
//!
//! Runs the simulation with the autopilot from the splash screen and logs
//! what happens. Useful for checking tuning files without a frontend.

use clap::Parser;

use paddle_ball::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use paddle_ball::{Tuning, consts};

#[derive(Debug, Parser)]
#[command(name = "paddle-ball", about = "Run a headless autopilot game")]
struct Args {
    /// Seed for launch angles
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Maximum ticks to simulate
    #[arg(long, default_value_t = 60 * consts::TICK_RATE_HZ as u64 * 5)]
    ticks: u64,
    #[arg(long, default_value_t = 800)]
    width: i32,
    #[arg(long, default_value_t = 600)]
    height: i32,
    /// Tuning JSON file; defaults are used when absent or invalid
    #[arg(long)]
    tuning: Option<std::path::PathBuf>,
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path).unwrap_or_else(|err| {
            log::error!("{err}; using default tuning");
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let mut state = GameState::with_tuning(args.width, args.height, args.seed, tuning);
    let input = TickInput {
        start: true,
        autopilot: true,
        ..Default::default()
    };

    let mut wall_hits = 0u64;
    for _ in 0..args.ticks {
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::WallHit => wall_hits += 1,
                other => log::debug!("{other:?}"),
            }
        }
        if state.phase() == GamePhase::Over {
            break;
        }
    }

    println!(
        "ticks={} phase={:?} outcome={:?} score={} level={} lives={} wall_hits={}",
        state.time_ticks(),
        state.phase(),
        state.outcome(),
        state.score(),
        state.level(),
        state.lives(),
        wall_hits
    );
}

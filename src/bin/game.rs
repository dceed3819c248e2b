//! Headless driver for the flappy simulation
//!
//! Runs the simulation on the main thread at a fixed frame rate while a
//! separate input thread plays as a simple autopilot, tapping through the
//! shared tap queue whenever the published status says so.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use flap_core::config::AppConfig;
use flap_core::health;
use flap_core::sim::World;
use flap_core::sim::clock::{FrameClock, frame_period};
use flap_core::sim::flappy::{FlappySimulation, GameState};

#[derive(Debug, Parser)]
#[command(version, about = "Headless flappy simulation")]
struct Args {
    /// How long to run, in seconds of wall-clock time
    #[arg(long, default_value_t = 10.0)]
    seconds: f32,

    /// Simulation frame rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seed for the gap offsets (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration profile (defaults to APP_PROFILE, then "release")
    #[arg(long)]
    profile: Option<String>,

    /// Autopilot taps at most this often, in milliseconds
    #[arg(long, default_value_t = 350)]
    tap_interval_ms: u64,

    /// Run the health checks and exit with their status
    #[arg(long)]
    health: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.health {
        let report = health::run_all_checks();
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    let config = match &args.profile {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    }
    .context("loading configuration")?;
    info!(profile = %config.profile, game = ?config.game, "Configuration loaded");

    let sim = match args.seed {
        Some(seed) => FlappySimulation::seeded(config.game.clone(), seed),
        None => FlappySimulation::new(config.game.clone()),
    };
    let taps = sim.tap_queue();
    let status = sim.status_handle();
    let mut world = World::new().with_simulation(Box::new(sim));

    let run_for = run_length(args.seconds)?;
    let tap_interval = Duration::from_millis(args.tap_interval_ms);
    let pilot_status = status.clone();
    let pilot = thread::spawn(move || {
        let started = Instant::now();
        let mut taps_sent = 0u32;
        let mut beat = 0u32;
        // Tap to start, flap every other beat, tap again after a crash to restart
        while started.elapsed() < run_for {
            if autopilot_taps(pilot_status.game_state(), beat) {
                taps.push();
                taps_sent += 1;
            }
            beat = beat.wrapping_add(1);
            thread::sleep(tap_interval);
        }
        taps_sent
    });

    let period = frame_period(args.fps);
    let mut clock = FrameClock::new();
    let started = Instant::now();
    let mut games_over = 0u32;
    let mut last_state = status.game_state();

    while started.elapsed() < run_for {
        let frame_start = Instant::now();
        world.tick(clock.delta());

        let (score, state) = status.load();
        if state != last_state {
            if state == GameState::GameOver {
                games_over += 1;
                info!(score, "Round ended");
            }
            last_state = state;
        }

        if let Some(remaining) = period.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    let taps_sent = match pilot.join() {
        Ok(count) => count,
        Err(_) => {
            warn!("Autopilot thread panicked");
            0
        }
    };

    let flappy = world
        .get_simulation_typed::<FlappySimulation>("flappy")
        .context("flappy simulation missing from world")?;
    let snapshot = flappy.snapshot();
    info!(
        ticks = world.tick_count(),
        skipped = world.skipped_ticks(),
        taps_sent,
        games_over,
        rounds = flappy.rounds_started(),
        "Run finished"
    );
    println!(
        "state: {:?}, score: {}, bird y: {:.1}, obstacle x: {:.1}",
        snapshot.state, snapshot.score, snapshot.bird.position_y, snapshot.obstacle_x
    );

    Ok(())
}

/// Converts `--seconds` into a run length; negative values mean no run
fn run_length(seconds: f32) -> Result<Duration> {
    Duration::try_from_secs_f32(seconds.max(0.0))
        .with_context(|| format!("invalid run length: {seconds} seconds"))
}

/// Whether the autopilot taps on this beat
fn autopilot_taps(state: GameState, beat: u32) -> bool {
    state != GameState::Playing || beat % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_length() {
        assert_eq!(run_length(1.5).unwrap(), Duration::from_millis(1500));
        assert_eq!(run_length(-3.0).unwrap(), Duration::ZERO);
        assert!(run_length(f32::INFINITY).is_err());
        assert!(run_length(f32::NAN).is_err());
    }

    #[test]
    fn test_autopilot_flaps_every_other_beat() {
        let taps = (0..6)
            .filter(|&beat| autopilot_taps(GameState::Playing, beat))
            .count();
        assert_eq!(taps, 3);
        assert!(autopilot_taps(GameState::Idle, 1));
        assert!(autopilot_taps(GameState::GameOver, 1));
    }
}

//! Game world/simulation health check

use crate::health::check::{CheckResult, SystemCheck};
use crate::sim::World;
use crate::sim::flappy::{FlappySimulation, GameConfig, GameState};

const DT: f32 = 1.0 / 60.0;
/// Upper bound on ticks for an untouched bird to hit something
const MAX_FALL_TICKS: usize = 60 * 30;

/// Plays one scripted round: start, fall until game over, restart
pub struct WorldCheck {
    config: GameConfig,
}

impl WorldCheck {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self { config }
    }
}

impl Default for WorldCheck {
    fn default() -> Self {
        Self::new()
    }
}

fn flappy(world: &mut World) -> Option<&mut FlappySimulation> {
    world.get_simulation_typed_mut::<FlappySimulation>("flappy")
}

impl SystemCheck for WorldCheck {
    fn name(&self) -> &'static str {
        "World/Simulation"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates the session state machine over one scripted round")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        if let Err(e) = self.config.validate() {
            return CheckResult::fail(format!("Invalid game config: {}", e));
        }

        let mut world = World::new().with_simulation(Box::new(FlappySimulation::seeded(
            self.config.clone(),
            0,
        )));
        let Some(sim) = flappy(&mut world) else {
            return CheckResult::fail("Flappy simulation not registered");
        };
        let status = sim.status_handle();
        details.push("  ✓ World initialized with flappy session".to_string());

        // First frame has no delta
        world.tick(None);
        if world.tick_count() != 0 {
            return CheckResult::fail("Missing delta was not treated as a no-op")
                .with_details(details.join("\n"));
        }

        let Some(sim) = flappy(&mut world) else {
            return CheckResult::fail("Flappy simulation not registered");
        };
        sim.on_tap();
        if status.game_state() != GameState::Playing {
            details.push("  ✗ Tap from Idle did not start the game".to_string());
            return CheckResult::fail("State machine failed").with_details(details.join("\n"));
        }
        details.push("  ✓ Tap started the game".to_string());

        let mut ticks = 0;
        while status.game_state() == GameState::Playing && ticks < MAX_FALL_TICKS {
            world.tick(Some(DT));
            ticks += 1;
        }
        if status.game_state() != GameState::GameOver {
            details.push(format!("  ✗ No collision after {} ticks", ticks));
            return CheckResult::fail("Collision detection failed")
                .with_details(details.join("\n"));
        }
        details.push(format!("  ✓ Game over after {} ticks", ticks));

        let Some(sim) = flappy(&mut world) else {
            return CheckResult::fail("Flappy simulation not registered");
        };
        sim.on_tap();
        let restarted = sim.state() == GameState::Playing
            && sim.score() == 0
            && sim.bird().position_y == self.config.initial_y();
        if !restarted {
            details.push("  ✗ Restart did not reset the round".to_string());
            return CheckResult::fail("Restart failed").with_details(details.join("\n"));
        }
        details.push("  ✓ Restart reset the round".to_string());

        CheckResult::pass("Session state machine operational").with_details(details.join("\n"))
    }
}

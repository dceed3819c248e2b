//! End-to-end session scenarios driven through the public API

use std::thread;

use flap_core::sim::World;
use flap_core::sim::flappy::{
    BirdState, FlappySimulation, GameConfig, GameState, GapSource, TapCommand,
};

/// Always returns the same offset
struct ConstantGap(f32);

impl GapSource for ConstantGap {
    fn next_offset(&mut self, _range: f32) -> f32 {
        self.0
    }
}

fn session() -> FlappySimulation {
    FlappySimulation::with_gap_source(GameConfig::default(), Box::new(ConstantGap(0.0)))
}

fn world_with(sim: FlappySimulation) -> World {
    World::new().with_simulation(Box::new(sim))
}

fn flappy(world: &mut World) -> &mut FlappySimulation {
    world
        .get_simulation_typed_mut::<FlappySimulation>("flappy")
        .expect("flappy simulation registered")
}

#[test]
fn test_tap_fall_and_restart() {
    let mut world = world_with(session());
    let initial_y = flappy(&mut world).config().initial_y();
    let jump = flappy(&mut world).config().jump_velocity;

    assert_eq!(flappy(&mut world).on_tap(), TapCommand::Start);
    assert_eq!(flappy(&mut world).state(), GameState::Playing);
    assert_eq!(flappy(&mut world).bird().velocity_y, jump);

    let mut previous = *flappy(&mut world).bird();
    for _ in 0..10 {
        world.tick(Some(0.016));
        let sim = flappy(&mut world);
        if sim.state() == GameState::GameOver {
            break;
        }
        let bird = *sim.bird();
        assert!(bird.velocity_y > previous.velocity_y);
        previous = bird;
    }

    // Ten frames after a jump the bird is still rising and airborne
    let sim = flappy(&mut world);
    assert_eq!(sim.state(), GameState::Playing);
    assert!(sim.bird().position_y < initial_y);

    // Let it fall into the ground or a pipe
    for _ in 0..600 {
        world.tick(Some(0.016));
    }
    let sim = flappy(&mut world);
    assert_eq!(sim.state(), GameState::GameOver);
    let frozen = sim.snapshot();
    assert!(frozen.show_game_over_panel);

    world.tick(Some(0.016));
    assert_eq!(flappy(&mut world).snapshot(), frozen);

    let sim = flappy(&mut world);
    assert_eq!(sim.on_tap(), TapCommand::Restart);
    assert_eq!(sim.state(), GameState::Playing);
    assert_eq!(sim.score(), 0);
    assert_eq!(*sim.bird(), BirdState::at_rest(initial_y));
    assert_eq!(sim.track().x(), sim.config().track_start_x());
}

#[test]
fn test_first_callback_without_delta() {
    let mut world = world_with(session());
    flappy(&mut world).on_tap();
    let before = flappy(&mut world).snapshot();

    world.tick(None);
    assert_eq!(flappy(&mut world).snapshot(), before);
}

#[test]
fn test_autopilot_can_score() {
    // Keep the bird level with the gap by tapping whenever it sinks below it
    let mut sim = session();
    sim.on_tap();

    // With gap offset 0 the opening spans y in (320, 480); a jump climbs
    // 125 px, so tapping at 460 keeps the center inside it
    let target_center = 460.0;
    for _ in 0..(60 * 7) {
        if sim.bird_center()[1] > target_center && sim.bird().velocity_y > 0.0 {
            sim.on_tap();
        }
        flap_core::sim::Simulation::tick(&mut sim, 1.0 / 60.0);
        assert_eq!(sim.state(), GameState::Playing, "crashed at {:?}", sim.snapshot());
    }
    assert!(sim.score() >= 2, "score was {}", sim.score());
}

#[test]
fn test_taps_and_status_across_threads() {
    let sim = session();
    let taps = sim.tap_queue();
    let status = sim.status_handle();
    let mut world = world_with(sim);

    thread::spawn(move || taps.push()).join().unwrap();
    assert_eq!(status.game_state(), GameState::Idle);

    world.tick(Some(0.016));
    let reader = status.clone();
    let seen = thread::spawn(move || reader.load()).join().unwrap();
    assert_eq!(seen, (0, GameState::Playing));
}

#[test]
fn test_double_tap_in_one_frame() {
    let sim = session();
    let taps = sim.tap_queue();
    let mut world = world_with(sim);

    flappy(&mut world).on_tap();
    taps.push();
    taps.push();
    world.tick(Some(0.016));

    let sim = flappy(&mut world);
    assert_eq!(sim.state(), GameState::Playing);
    assert_eq!(sim.rounds_started(), 1);
}

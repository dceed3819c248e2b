//! Flappy simulation
//!
//! A bird under gravity, one recycling obstacle pair, and the
//! Idle → Playing → GameOver → Playing state machine driving them.
//!
//! Only [`FlappySimulation::tick`] moves the world. Taps either arrive
//! directly through [`FlappySimulation::on_tap`] or through a [`TapQueue`]
//! drained at the start of each tick. Other threads observe score and state
//! through a [`StatusHandle`].

pub mod bird;
pub mod collision;
pub mod config;
pub mod input;
pub mod scoring;
pub mod status;
pub mod track;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::Simulation;

pub use bird::BirdState;
pub use collision::{Rect, WorldBounds};
pub use config::{GameConfig, GameConfigError};
pub use input::{TapCommand, TapQueue};
pub use scoring::ScoreTracker;
pub use status::StatusHandle;
pub use track::{GapSource, ObstacleTrack, RandomGaps, TrackStep};

use status::StatusWriter;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum GameState {
    #[default]
    Idle = 0,
    Playing = 1,
    GameOver = 2,
}

impl GameState {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(GameState::Idle),
            1 => Some(GameState::Playing),
            2 => Some(GameState::GameOver),
            _ => None,
        }
    }
}

/// Everything a restart throws away
#[derive(Debug, Clone)]
struct Round {
    bird: BirdState,
    track: ObstacleTrack,
    scorer: ScoreTracker,
    score: u32,
}

impl Round {
    fn new(config: &GameConfig) -> Self {
        Self {
            bird: BirdState::at_rest(config.initial_y()),
            track: ObstacleTrack::new(config),
            scorer: ScoreTracker::new(config.bird_x()),
            score: 0,
        }
    }
}

/// Per-frame, read-only view for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub bird_x: f32,
    pub bird: BirdState,
    /// Display rotation in radians
    pub rotation: f32,
    pub obstacle_x: f32,
    pub top: Rect,
    pub bottom: Rect,
    pub score: u32,
    pub state: GameState,
    pub show_start_prompt: bool,
    pub show_game_over_panel: bool,
}

/// One flappy game session
pub struct FlappySimulation {
    config: GameConfig,
    state: GameState,
    round: Round,
    gaps: Box<dyn GapSource>,
    taps: TapQueue,
    status: StatusWriter,
    rounds_started: u32,
}

impl FlappySimulation {
    /// Creates an idle session with randomly drawn gap offsets
    pub fn new(config: GameConfig) -> Self {
        Self::with_gap_source(config, Box::new(RandomGaps::seeded(rand::random())))
    }

    /// Creates an idle session whose gap offsets come from a fixed seed
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_gap_source(config, Box::new(RandomGaps::seeded(seed)))
    }

    /// Creates an idle session drawing gap offsets from `gaps`
    pub fn with_gap_source(config: GameConfig, gaps: Box<dyn GapSource>) -> Self {
        let round = Round::new(&config);
        Self {
            config,
            state: GameState::Idle,
            round,
            gaps,
            taps: TapQueue::new(),
            status: StatusWriter::new(),
            rounds_started: 0,
        }
    }

    /// Handles one tap right away and returns what it did
    pub fn on_tap(&mut self) -> TapCommand {
        let command = TapCommand::for_state(self.state);
        match command {
            TapCommand::Start => {
                self.begin_round();
                self.round.bird.apply_impulse(self.config.jump_velocity);
                info!(
                    round = self.rounds_started,
                    scroll_speed = self.round.track.speed(),
                    "Game started"
                );
            }
            TapCommand::Jump => {
                self.round.bird.apply_impulse(self.config.jump_velocity);
            }
            TapCommand::Restart => {
                let final_score = self.round.score;
                self.round = Round::new(&self.config);
                self.begin_round();
                info!(round = self.rounds_started, final_score, "Game restarted");
            }
        }
        self.publish();
        command
    }

    fn begin_round(&mut self) {
        self.state = GameState::Playing;
        self.rounds_started += 1;
        self.round.track.start();
    }

    /// Advances the session by `delta_time` seconds
    ///
    /// Pending queued taps are handled first, in arrival order. Outside of
    /// Playing, or for a zero, negative or non-finite delta, nothing moves.
    fn step(&mut self, delta_time: f32) {
        for _ in 0..self.taps.take() {
            self.on_tap();
        }

        if self.state != GameState::Playing {
            return;
        }
        if !(delta_time > 0.0) || !delta_time.is_finite() {
            trace!(delta_time, "Skipping tick with unusable delta");
            return;
        }

        let round = &mut self.round;
        round.bird.integrate(delta_time, self.config.gravity);

        let track_step = round.track.advance(delta_time, self.gaps.as_mut());
        if track_step.resampled {
            debug!(gap_offset = round.track.gap_offset(), "Gap offset redrawn");
        }

        if self.collides() {
            // Freeze in the same tick that detected the hit
            self.round.track.cancel();
            self.state = GameState::GameOver;
            info!(
                score = self.round.score,
                bird_y = self.round.bird.position_y,
                obstacle_x = self.round.track.x(),
                "Game over"
            );
        } else {
            // A wrapping step went through the end of the span before
            // restarting, so the pass may have happened before the wrap.
            let round = &mut self.round;
            let mut passes = 0;
            if track_step.recycled && round.scorer.observe(round.track.end_x()) {
                passes += 1;
            }
            if round.scorer.observe(round.track.x()) {
                passes += 1;
            }
            if passes > 0 {
                round.score += passes;
                debug!(score = round.score, "Obstacle passed");
            }
        }

        self.publish();
    }

    fn collides(&self) -> bool {
        let (top, bottom) = self.round.track.current_rects();
        collision::check(
            self.bird_center(),
            self.round.bird.position_y,
            &[top, bottom],
            &self.bounds(),
        )
    }

    fn publish(&self) {
        self.status.publish(self.round.score, self.state);
    }

    /// Center point of the bird sprite, used for obstacle hits
    pub fn bird_center(&self) -> [f32; 2] {
        [
            self.config.bird_x() + self.config.bird_width / 2.0,
            self.round.bird.position_y + self.config.bird_height / 2.0,
        ]
    }

    pub fn bounds(&self) -> WorldBounds {
        WorldBounds {
            ground_y: self.config.ground_y(),
            ground_margin: self.config.ground_margin,
            ceiling_y: self.config.ceiling_y,
        }
    }

    /// Builds the render view for the current frame
    pub fn snapshot(&self) -> RenderSnapshot {
        let (top, bottom) = self.round.track.current_rects();
        RenderSnapshot {
            bird_x: self.config.bird_x(),
            bird: self.round.bird,
            rotation: self
                .round
                .bird
                .rotation(self.config.jump_velocity, self.config.max_rotation),
            obstacle_x: self.round.track.x(),
            top,
            bottom,
            score: self.round.score,
            state: self.state,
            show_start_prompt: self.state == GameState::Idle,
            show_game_over_panel: self.state == GameState::GameOver,
        }
    }

    /// Returns a handle for pushing taps from other threads
    pub fn tap_queue(&self) -> TapQueue {
        self.taps.clone()
    }

    /// Returns a read-only status handle for other threads
    pub fn status_handle(&self) -> StatusHandle {
        self.status.handle()
    }

    // Accessors

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn bird(&self) -> &BirdState {
        &self.round.bird
    }

    pub fn track(&self) -> &ObstacleTrack {
        &self.round.track
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of rounds started since construction (starts and restarts)
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }
}

impl Simulation for FlappySimulation {
    fn tick(&mut self, delta_time: f32) {
        self.step(delta_time);
    }

    /// Returns to Idle with a fresh round
    fn reset(&mut self) {
        self.round = Round::new(&self.config);
        self.state = GameState::Idle;
        self.taps.take();
        self.publish();
    }

    fn name(&self) -> &str {
        "flappy"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

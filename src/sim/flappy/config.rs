//! Tuning constants for the flappy session
//!
//! Every field has a serde default so partial config files deserialize.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`GameConfig::validate`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameConfigError {
    #[error("world dimensions must be positive (got {width}x{height})")]
    InvalidWorldSize { width: f32, height: f32 },
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("jump velocity must point upward (negative), got {0}")]
    DownwardJump(f32),
    #[error("track end x ({end}) must be left of the track start ({start})")]
    InvertedTrack { start: f32, end: f32 },
    #[error("recycle threshold {threshold} lies outside the scroll span [{end}, {start}]")]
    ThresholdOutsideTrack { threshold: f32, start: f32, end: f32 },
    #[error("gap range must be non-negative (got {0})")]
    NegativeGapRange(f32),
    #[error("{name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: f32 },
}

/// World bounds and tuning for one flappy session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width; obstacles start their scroll here
    pub world_width: f32,
    /// Playfield height; also the ground line
    pub world_height: f32,
    /// Downward acceleration in px/s²
    pub gravity: f32,
    /// Velocity set by a jump (negative is up)
    pub jump_velocity: f32,
    /// The bird hits the ground once `y > world_height - ground_margin`
    pub ground_margin: f32,
    /// The bird hits the ceiling once `y <= ceiling_y`
    pub ceiling_y: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    /// Obstacle x at the end of one scroll cycle
    pub track_end_x: f32,
    /// Seconds per scroll cycle
    pub scroll_duration: f32,
    /// Crossing this x (falling edge) redraws the gap offset
    pub recycle_threshold_x: f32,
    /// Gap offsets are drawn from `[-gap_range, gap_range]`
    pub gap_range: f32,
    /// Rotation clamp in radians
    pub max_rotation: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 400.0,
            world_height: 800.0,
            gravity: 1000.0,
            jump_velocity: -500.0,
            ground_margin: 100.0,
            ceiling_y: 0.0,
            bird_width: 64.0,
            bird_height: 48.0,
            pipe_width: 103.0,
            pipe_height: 640.0,
            track_end_x: -150.0,
            scroll_duration: 3.0,
            recycle_threshold_x: -100.0,
            gap_range: 200.0,
            max_rotation: 0.5,
        }
    }
}

impl GameConfig {
    /// Fixed horizontal position of the bird
    pub fn bird_x(&self) -> f32 {
        self.world_width / 4.0
    }

    /// Bird y at session start and after every restart
    pub fn initial_y(&self) -> f32 {
        self.world_height / 3.0
    }

    pub fn ground_y(&self) -> f32 {
        self.world_height
    }

    /// Obstacle x at the start of every scroll cycle
    pub fn track_start_x(&self) -> f32 {
        self.world_width
    }

    fn fields(&self) -> [(&'static str, f32); 15] {
        [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("ground_margin", self.ground_margin),
            ("ceiling_y", self.ceiling_y),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("track_end_x", self.track_end_x),
            ("scroll_duration", self.scroll_duration),
            ("recycle_threshold_x", self.recycle_threshold_x),
            ("gap_range", self.gap_range),
            ("max_rotation", self.max_rotation),
        ]
    }

    /// Checks that the tuning describes a playable world
    pub fn validate(&self) -> Result<(), GameConfigError> {
        if let Some((name, value)) = self.fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(GameConfigError::NonFinite { name, value });
        }

        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return Err(GameConfigError::InvalidWorldSize {
                width: self.world_width,
                height: self.world_height,
            });
        }

        for (name, value) in [
            ("gravity", self.gravity),
            ("scroll_duration", self.scroll_duration),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
        ] {
            if !(value > 0.0) {
                return Err(GameConfigError::NonPositive { name, value });
            }
        }

        if !(self.jump_velocity < 0.0) {
            return Err(GameConfigError::DownwardJump(self.jump_velocity));
        }

        let start = self.track_start_x();
        let end = self.track_end_x;
        if !(end < start) {
            return Err(GameConfigError::InvertedTrack { start, end });
        }

        let threshold = self.recycle_threshold_x;
        if !(end..=start).contains(&threshold) {
            return Err(GameConfigError::ThresholdOutsideTrack {
                threshold,
                start,
                end,
            });
        }

        if !(self.gap_range >= 0.0) {
            return Err(GameConfigError::NegativeGapRange(self.gap_range));
        }

        Ok(())
    }
}

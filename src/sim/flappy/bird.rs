//! Bird physics

use serde::{Deserialize, Serialize};

/// Vertical state of the bird (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirdState {
    pub position_y: f32,
    pub velocity_y: f32,
}

impl BirdState {
    /// Creates a bird at rest at `position_y`
    pub fn at_rest(position_y: f32) -> Self {
        Self {
            position_y,
            velocity_y: 0.0,
        }
    }

    /// Advances the bird by `dt` seconds with explicit Euler
    ///
    /// Position uses the velocity from before this step. Zero, negative and
    /// non-finite deltas leave the bird untouched.
    pub fn integrate(&mut self, dt: f32, gravity: f32) {
        if !(dt > 0.0) || !dt.is_finite() {
            return;
        }

        self.position_y += self.velocity_y * dt;
        self.velocity_y += gravity * dt;
    }

    /// Overwrites the vertical velocity with the jump velocity
    pub fn apply_impulse(&mut self, jump_velocity: f32) {
        self.velocity_y = jump_velocity;
    }

    /// Display rotation in radians derived from the current velocity
    ///
    /// Maps `[-jump_speed, jump_speed]` linearly onto
    /// `[-max_rotation, max_rotation]` and clamps outside that span.
    pub fn rotation(&self, jump_velocity: f32, max_rotation: f32) -> f32 {
        let span = jump_velocity.abs();
        if span == 0.0 {
            return 0.0;
        }
        (self.velocity_y / span * max_rotation).clamp(-max_rotation, max_rotation)
    }
}

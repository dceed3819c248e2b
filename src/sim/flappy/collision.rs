//! Collision detection against obstacles and world bounds

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive on all four edges: touching the border counts as inside
    pub fn contains(&self, point: [f32; 2]) -> bool {
        let [px, py] = point;
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Vertical limits the bird must stay within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub ground_y: f32,
    pub ground_margin: f32,
    pub ceiling_y: f32,
}

impl WorldBounds {
    pub fn hits_ground(&self, position_y: f32) -> bool {
        position_y > self.ground_y - self.ground_margin
    }

    pub fn hits_ceiling(&self, position_y: f32) -> bool {
        position_y <= self.ceiling_y
    }
}

/// Returns true when the bird touches an obstacle, the ground or the ceiling
///
/// Obstacles are tested against the bird's center point, the bounds against
/// its top edge `position_y`. Any single hit is a collision.
pub fn check(bird_center: [f32; 2], position_y: f32, rects: &[Rect], bounds: &WorldBounds) -> bool {
    rects.iter().any(|rect| rect.contains(bird_center))
        || bounds.hits_ground(position_y)
        || bounds.hits_ceiling(position_y)
}

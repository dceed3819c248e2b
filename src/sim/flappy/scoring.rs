//! Obstacle pass detection

/// Edge-triggered detector for the obstacle passing the bird
///
/// Fires once when the obstacle x moves from ahead of the bird
/// (`> bird_x`) to level with or behind it (`<= bird_x`).
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    bird_x: f32,
    previous_x: Option<f32>,
}

impl ScoreTracker {
    pub fn new(bird_x: f32) -> Self {
        Self {
            bird_x,
            previous_x: None,
        }
    }

    /// Records the obstacle x for this tick, returns true on a pass event
    pub fn observe(&mut self, x: f32) -> bool {
        let passed = matches!(self.previous_x, Some(prev) if prev > self.bird_x && x <= self.bird_x);
        self.previous_x = Some(x);
        passed
    }
}

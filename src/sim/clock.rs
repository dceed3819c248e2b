//! Frame clock producing per-tick deltas

use std::time::{Duration, Instant};

/// Measures elapsed time between successive frames
///
/// The first call to [`FrameClock::delta`] has no previous frame to measure
/// against and returns `None`.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call
    pub fn delta(&mut self) -> Option<f32> {
        self.delta_at(Instant::now())
    }

    /// Seconds between the previous frame and `now`
    pub fn delta_at(&mut self, now: Instant) -> Option<f32> {
        let delta = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f32());
        self.last_frame = Some(now);
        delta
    }

    /// Forgets the previous frame so the next delta is `None` again
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

/// Converts a target rate into the frame period
pub fn frame_period(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_delta_is_none() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(), None);
        assert!(clock.delta().is_some());
    }

    #[test]
    fn test_delta_between_instants() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.delta_at(start);
        let dt = clock.delta_at(start + Duration::from_millis(16)).unwrap();
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_instant_gives_zero() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.delta_at(start + Duration::from_millis(5));
        assert_eq!(clock.delta_at(start), Some(0.0));
    }

    #[test]
    fn test_reset_forgets_previous_frame() {
        let mut clock = FrameClock::new();
        clock.delta();
        clock.reset();
        assert_eq!(clock.delta(), None);
    }

    #[test]
    fn test_frame_period() {
        assert_eq!(frame_period(50), Duration::from_millis(20));
        assert_eq!(frame_period(0), Duration::from_secs(1));
    }
}

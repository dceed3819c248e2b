//! Single-slot obstacle track
//!
//! One obstacle pair scrolls linearly from the track start to the track end
//! over a fixed duration, then jumps back to the start, forever. The gap
//! offset is redrawn once per cycle when the pair crosses the recycle
//! threshold.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::collision::Rect;
use super::config::GameConfig;

/// Source of vertical gap offsets
///
/// Implementations should return values in `[-range, range]`; the track
/// clamps anything outside.
pub trait GapSource {
    fn next_offset(&mut self, range: f32) -> f32;
}

/// Uniform gap offsets backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RandomGaps<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomGaps<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomGaps<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GapSource for RandomGaps<R> {
    fn next_offset(&mut self, range: f32) -> f32 {
        if range.is_finite() && range > 0.0 {
            self.rng.random_range(-range..=range)
        } else {
            0.0
        }
    }
}

/// What happened to the track during one [`ObstacleTrack::advance`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackStep {
    /// The gap offset was redrawn
    pub resampled: bool,
    /// The pair wrapped back to the track start
    pub recycled: bool,
}

#[derive(Debug, Clone)]
pub struct ObstacleTrack {
    start_x: f32,
    end_x: f32,
    duration: f32,
    threshold_x: f32,
    gap_range: f32,
    pipe_width: f32,
    pipe_height: f32,
    world_height: f32,
    /// Current horizontal position of the pair
    x: f32,
    gap_offset: f32,
    /// Time spent in the current cycle
    elapsed: f32,
    /// Whether the gap was already redrawn this cycle
    resampled: bool,
    running: bool,
}

impl ObstacleTrack {
    /// Creates a stopped track with the pair at the start position
    pub fn new(config: &GameConfig) -> Self {
        let mut track = Self {
            start_x: config.track_start_x(),
            end_x: config.track_end_x,
            duration: config.scroll_duration,
            threshold_x: config.recycle_threshold_x,
            gap_range: config.gap_range,
            pipe_width: config.pipe_width,
            pipe_height: config.pipe_height,
            world_height: config.world_height,
            x: 0.0,
            gap_offset: 0.0,
            elapsed: 0.0,
            resampled: false,
            running: false,
        };
        track.reset();
        track
    }

    /// Starts (or resumes) scrolling
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halts scrolling immediately; the pair stays where it is
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Drops the in-flight cycle and moves the pair back to the start
    pub fn reset(&mut self) {
        self.x = self.start_x;
        self.elapsed = 0.0;
        self.resampled = false;
    }

    /// Moves the pair along the scroll profile by `dt` seconds
    pub fn advance(&mut self, dt: f32, gaps: &mut dyn GapSource) -> TrackStep {
        let mut step = TrackStep::default();
        if !self.running || !(dt > 0.0) || !dt.is_finite() {
            return step;
        }

        let mut previous_x = self.x;
        self.elapsed += dt;

        if self.elapsed >= self.duration {
            // A long step can skip the threshold entirely; redraw before the wrap.
            if !self.resampled {
                self.resample(gaps);
                step.resampled = true;
            }
            self.elapsed = if self.duration > 0.0 {
                self.elapsed % self.duration
            } else {
                0.0
            };
            self.resampled = false;
            step.recycled = true;
            previous_x = self.start_x;
        }

        self.x = self.position_at(self.elapsed);

        if !self.resampled && previous_x > self.threshold_x && self.x <= self.threshold_x {
            self.resample(gaps);
            step.resampled = true;
        }

        step
    }

    fn position_at(&self, elapsed: f32) -> f32 {
        if !(self.duration > 0.0) || !self.duration.is_finite() {
            return self.start_x;
        }
        self.start_x + (self.end_x - self.start_x) * (elapsed / self.duration)
    }

    fn resample(&mut self, gaps: &mut dyn GapSource) {
        let range = if self.gap_range.is_finite() {
            self.gap_range.max(0.0)
        } else {
            0.0
        };
        let offset = gaps.next_offset(range);
        self.gap_offset = if offset.is_finite() {
            offset.clamp(-range, range)
        } else {
            0.0
        };
        self.resampled = true;
    }

    /// Returns the `(top, bottom)` pipe rectangles
    pub fn current_rects(&self) -> (Rect, Rect) {
        let half = self.pipe_height / 2.0;
        let top = Rect::new(
            self.x,
            self.gap_offset - half,
            self.pipe_width,
            self.pipe_height,
        );
        let bottom = Rect::new(
            self.x,
            self.world_height - half + self.gap_offset,
            self.pipe_width,
            self.pipe_height,
        );
        (top, bottom)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn gap_offset(&self) -> f32 {
        self.gap_offset
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start_x(&self) -> f32 {
        self.start_x
    }

    /// Left end of the scroll span, where the pair recycles
    pub fn end_x(&self) -> f32 {
        self.end_x
    }

    /// Scroll speed in px/s (negative: moving left)
    pub fn speed(&self) -> f32 {
        (self.end_x - self.start_x) / self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of offsets, then repeats the last one
    struct Scripted {
        values: Vec<f32>,
        calls: usize,
    }

    impl Scripted {
        fn new(values: &[f32]) -> Self {
            Self {
                values: values.to_vec(),
                calls: 0,
            }
        }
    }

    impl GapSource for Scripted {
        fn next_offset(&mut self, _range: f32) -> f32 {
            let value = self.values[self.calls.min(self.values.len() - 1)];
            self.calls += 1;
            value
        }
    }

    fn running_track() -> ObstacleTrack {
        let mut track = ObstacleTrack::new(&GameConfig::default());
        track.start();
        track
    }

    #[test]
    fn test_new_track_is_stopped_at_start() {
        let mut track = ObstacleTrack::new(&GameConfig::default());
        let mut gaps = Scripted::new(&[0.0]);

        assert_eq!(track.x(), 400.0);
        assert!(!track.is_running());
        assert_eq!(track.advance(1.0, &mut gaps), TrackStep::default());
        assert_eq!(track.x(), 400.0);
    }

    #[test]
    fn test_linear_scroll() {
        let mut track = running_track();
        let mut gaps = Scripted::new(&[0.0]);

        // 550 px over 3 s
        track.advance(1.5, &mut gaps);
        assert!((track.x() - 125.0).abs() < 1e-3);
        assert!((track.speed() - -550.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_resample_on_threshold_crossing() {
        let mut track = running_track();
        let mut gaps = Scripted::new(&[150.0]);

        // x = 400 - 550 * t / 3; crosses -100 at t ≈ 2.727
        let step = track.advance(2.7, &mut gaps);
        assert!(!step.resampled);
        assert_eq!(track.gap_offset(), 0.0);

        let step = track.advance(0.1, &mut gaps);
        assert!(step.resampled);
        assert!(!step.recycled);
        assert_eq!(track.gap_offset(), 150.0);
        assert_eq!(gaps.calls, 1);
    }

    #[test]
    fn test_recycle_resets_x_and_keeps_single_resample() {
        let mut track = running_track();
        let mut gaps = Scripted::new(&[-75.0, 20.0]);

        track.advance(2.8, &mut gaps);
        assert_eq!(track.gap_offset(), -75.0);

        let step = track.advance(0.3, &mut gaps);
        assert!(step.recycled);
        assert!(!step.resampled);
        // back at the start, 0.1 s into the new cycle
        assert!((track.x() - (400.0 - 550.0 * 0.1 / 3.0)).abs() < 1e-2);
        assert_eq!(gaps.calls, 1);
    }

    #[test]
    fn test_skipped_threshold_still_resamples_before_wrap() {
        let mut track = running_track();
        let mut gaps = Scripted::new(&[99.0]);

        let step = track.advance(3.1, &mut gaps);
        assert!(step.recycled);
        assert!(step.resampled);
        assert_eq!(track.gap_offset(), 99.0);
        // 0.1 s into the next cycle
        assert!((track.x() - (400.0 - 550.0 * 0.1 / 3.0)).abs() < 1e-2);
    }

    #[test]
    fn test_out_of_range_offsets_are_clamped() {
        let mut track = running_track();
        let mut gaps = Scripted::new(&[1000.0]);

        track.advance(2.9, &mut gaps);
        assert_eq!(track.gap_offset(), 200.0);
    }

    #[test]
    fn test_random_gaps_stay_in_range() {
        let mut track = running_track();
        let mut gaps = RandomGaps::seeded(7);

        let mut previous = track.gap_offset();
        let mut changed = 0;
        for _ in 0..20 {
            let step = track.advance(3.0, &mut gaps);
            assert!(step.recycled);
            assert!((-200.0..=200.0).contains(&track.gap_offset()));
            if track.gap_offset() != previous {
                changed += 1;
            }
            previous = track.gap_offset();
        }
        assert!(changed >= 19);
    }

    #[test]
    fn test_random_gaps_ignore_unbounded_range() {
        let mut gaps = RandomGaps::seeded(3);
        assert_eq!(gaps.next_offset(f32::INFINITY), 0.0);
        assert_eq!(gaps.next_offset(f32::NAN), 0.0);
        assert_eq!(gaps.next_offset(0.0), 0.0);
    }

    #[test]
    fn test_unvalidated_infinite_gap_range_does_not_panic() {
        let mut track = ObstacleTrack::new(&GameConfig {
            gap_range: f32::INFINITY,
            ..Default::default()
        });
        track.start();
        let mut gaps = RandomGaps::seeded(11);

        let step = track.advance(2.9, &mut gaps);
        assert!(step.resampled);
        assert_eq!(track.gap_offset(), 0.0);
    }

    #[test]
    fn test_zero_duration_keeps_pair_at_start() {
        let mut track = ObstacleTrack::new(&GameConfig {
            scroll_duration: 0.0,
            ..Default::default()
        });
        track.start();
        let mut gaps = Scripted::new(&[0.0]);

        let step = track.advance(0.016, &mut gaps);
        assert!(step.recycled);
        assert_eq!(track.x(), 400.0);
        track.advance(0.016, &mut gaps);
        assert_eq!(track.x(), 400.0);
    }

    #[test]
    fn test_cancel_freezes_motion() {
        let mut track = running_track();
        let mut gaps = Scripted::new(&[0.0]);

        track.advance(0.5, &mut gaps);
        let frozen = track.x();
        track.cancel();
        track.advance(0.5, &mut gaps);
        assert_eq!(track.x(), frozen);
    }

    #[test]
    fn test_reset_starts_fresh_cycle() {
        let mut track = running_track();
        let mut gaps = Scripted::new(&[0.0]);

        track.advance(2.0, &mut gaps);
        track.reset();
        assert_eq!(track.x(), 400.0);

        track.advance(1.5, &mut gaps);
        assert!((track.x() - 125.0).abs() < 1e-3);
    }

    #[test]
    fn test_rects_follow_gap_offset() {
        let mut track = running_track();
        let mut gaps = Scripted::new(&[50.0]);
        track.advance(2.8, &mut gaps);

        let (top, bottom) = track.current_rects();
        assert_eq!(top.x, track.x());
        assert_eq!(bottom.x, track.x());
        assert_eq!(top.y, 50.0 - 320.0);
        assert_eq!(bottom.y, 800.0 - 320.0 + 50.0);
        assert_eq!(top.width, 103.0);
        assert_eq!(bottom.height, 640.0);
    }
}

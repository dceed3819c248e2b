//! Tap input
//!
//! A tap carries no payload; what it means depends only on the game state at
//! the moment it is handled.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use super::GameState;

/// Command a tap resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapCommand {
    /// Leave Idle and give the first jump in the same action
    Start,
    Jump,
    /// Full reset into a fresh round, without a jump
    Restart,
}

impl TapCommand {
    pub fn for_state(state: GameState) -> Self {
        match state {
            GameState::Idle => TapCommand::Start,
            GameState::Playing => TapCommand::Jump,
            GameState::GameOver => TapCommand::Restart,
        }
    }
}

/// Taps delivered from outside the simulation thread
///
/// Any clone may push; the simulation takes all pending taps at the start of
/// its next tick and handles them one by one. No debouncing happens here.
#[derive(Debug, Clone, Default)]
pub struct TapQueue {
    pending: Arc<AtomicU32>,
}

impl TapQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self) {
        self.pending.fetch_add(1, Ordering::AcqRel);
    }

    /// Takes every pending tap, leaving the queue empty
    pub fn take(&self) -> u32 {
        self.pending.swap(0, Ordering::AcqRel)
    }

    pub fn len(&self) -> u32 {
        self.pending.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_per_state() {
        assert_eq!(TapCommand::for_state(GameState::Idle), TapCommand::Start);
        assert_eq!(TapCommand::for_state(GameState::Playing), TapCommand::Jump);
        assert_eq!(
            TapCommand::for_state(GameState::GameOver),
            TapCommand::Restart
        );
    }

    #[test]
    fn test_push_and_take() {
        let queue = TapQueue::new();
        queue.push();
        queue.push();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.take(), 2);
        assert!(queue.is_empty());
        assert_eq!(queue.take(), 0);
    }

    #[test]
    fn test_clones_share_pending_taps() {
        let queue = TapQueue::new();
        let producer = queue.clone();

        let threads: Vec<_> = (0..4)
            .map(|_| {
                let producer = producer.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        producer.push();
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }

        assert_eq!(queue.take(), 100);
    }
}

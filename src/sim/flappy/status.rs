//! Cross-thread view of the session status
//!
//! The simulation is the only writer. Score and game state are packed into
//! one atomic word so a reader never sees a score from one round paired
//! with the state of another.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::GameState;

fn pack(score: u32, state: GameState) -> u64 {
    ((state as u64) << 32) | score as u64
}

fn unpack(word: u64) -> (u32, GameState) {
    let score = word as u32;
    let state = GameState::from_u8((word >> 32) as u8).unwrap_or(GameState::Idle);
    (score, state)
}

/// Read-only handle to the latest published status
#[derive(Debug, Clone)]
pub struct StatusHandle {
    word: Arc<AtomicU64>,
}

impl StatusHandle {
    /// Returns `(score, state)` from a single consistent read
    pub fn load(&self) -> (u32, GameState) {
        unpack(self.word.load(Ordering::Acquire))
    }

    pub fn score(&self) -> u32 {
        self.load().0
    }

    pub fn game_state(&self) -> GameState {
        self.load().1
    }

    pub fn is_game_over(&self) -> bool {
        self.game_state() == GameState::GameOver
    }
}

/// Write side, owned by the simulation
#[derive(Debug)]
pub(crate) struct StatusWriter {
    word: Arc<AtomicU64>,
}

impl StatusWriter {
    pub(crate) fn new() -> Self {
        Self {
            word: Arc::new(AtomicU64::new(pack(0, GameState::Idle))),
        }
    }

    pub(crate) fn handle(&self) -> StatusHandle {
        StatusHandle {
            word: Arc::clone(&self.word),
        }
    }

    pub(crate) fn publish(&self, score: u32, state: GameState) {
        self.word.store(pack(score, state), Ordering::Release);
    }
}

//! Flap Core
//!
//! Simulation core for a tap-to-play side-scrolling avoider game: bird
//! physics, a recycling obstacle track, collision, scoring, and the
//! Idle → Playing → GameOver state machine.

/// Build-time information (rustc, target, timestamp)
pub mod build_info;

/// Layered configuration (profile files + environment)
pub mod config;

/// Health checks for configuration and the session state machine
pub mod health;

/// Game simulation - world tick, flappy session, and frame clock
pub mod sim;

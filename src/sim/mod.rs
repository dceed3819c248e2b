//! Game simulation module
//!
//! Owns the world tick and the game simulations it drives.

pub mod clock;
pub mod flappy;

use std::any::Any;

use tracing::trace;

/// Trait that all game simulations must implement
///
/// The World owns its simulations and forwards every usable tick to them.
/// Each simulation is responsible for its own state and logic.
pub trait Simulation {
    /// Updates the simulation by one tick
    ///
    /// # Arguments
    /// * `delta_time` - Time elapsed since last tick in seconds, always positive and finite
    fn tick(&mut self, delta_time: f32);

    /// Resets the simulation to its initial state
    fn reset(&mut self);

    /// Returns the name/identifier of this simulation
    fn name(&self) -> &str;

    /// Returns true if the simulation is currently active
    fn is_active(&self) -> bool {
        true
    }

    /// Allows downcasting to concrete types for specific operations
    fn as_any(&self) -> &dyn Any;

    /// Mutable version of as_any for type-safe mutable access
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Game world state
pub struct World {
    /// Number of ticks forwarded to simulations
    tick_count: u64,
    /// Number of ticks dropped for a missing or unusable delta
    skipped_ticks: u64,
    /// Total simulation time elapsed in seconds
    sim_time: f64,
    /// Time scale multiplier (1.0 = normal speed, 2.0 = 2x speed)
    time_scale: f32,
    /// Whether the simulation is paused
    paused: bool,
    /// Collection of all active simulations
    simulations: Vec<Box<dyn Simulation>>,
}

impl World {
    /// Creates a new game world with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the time scale
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.set_time_scale(scale);
        self
    }

    /// Builder method to add a simulation
    pub fn with_simulation(mut self, sim: Box<dyn Simulation>) -> Self {
        self.add_simulation(sim);
        self
    }

    /// Updates the world simulation by one tick
    ///
    /// A missing delta (first frame), or one that is zero, negative or not
    /// finite, is a no-op tick.
    pub fn tick(&mut self, delta_time: Option<f32>) {
        if self.paused {
            return;
        }

        let scaled_delta = match delta_time.map(|dt| dt * self.time_scale) {
            Some(dt) if dt > 0.0 && dt.is_finite() => dt,
            other => {
                trace!(delta_time = ?other, "Skipping no-op tick");
                self.skipped_ticks += 1;
                return;
            }
        };

        self.tick_count += 1;
        self.sim_time += scaled_delta as f64;

        for sim in &mut self.simulations {
            if sim.is_active() {
                sim.tick(scaled_delta);
            }
        }
    }

    /// Returns the current tick count
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns how many ticks were dropped as no-ops
    pub fn skipped_ticks(&self) -> u64 {
        self.skipped_ticks
    }

    /// Returns the total simulation time in seconds
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Sets the time scale multiplier, clamped to non-negative values
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Returns the current time scale
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Pauses the simulation
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes the simulation
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Returns whether the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Adds a simulation to the world
    pub fn add_simulation(&mut self, sim: Box<dyn Simulation>) {
        self.simulations.push(sim);
    }

    /// Returns a reference to all simulations
    pub fn simulations(&self) -> &[Box<dyn Simulation>] {
        &self.simulations
    }

    /// Gets a typed reference to a specific simulation
    ///
    /// # Example
    /// ```ignore
    /// if let Some(flappy) = world.get_simulation_typed::<FlappySimulation>("flappy") {
    ///     let snapshot = flappy.snapshot();
    /// }
    /// ```
    pub fn get_simulation_typed<T: 'static>(&self, name: &str) -> Option<&T> {
        self.simulations
            .iter()
            .find(|s| s.name() == name)
            .and_then(|s| s.as_any().downcast_ref::<T>())
    }

    /// Gets a mutable typed reference to a specific simulation
    pub fn get_simulation_typed_mut<T: 'static>(&mut self, name: &str) -> Option<&mut T> {
        self.simulations
            .iter_mut()
            .find(|s| s.name() == name)
            .and_then(|s| s.as_any_mut().downcast_mut::<T>())
    }

    /// Resets all simulations to their initial state
    pub fn reset_all_simulations(&mut self) {
        for sim in &mut self.simulations {
            sim.reset();
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self {
            tick_count: 0,
            skipped_ticks: 0,
            sim_time: 0.0,
            time_scale: 1.0,
            paused: false,
            simulations: Vec::new(),
        }
    }
}

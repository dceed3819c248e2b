//! Built-in health checks for core systems

pub mod build_info;
pub mod config;
pub mod world;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use world::WorldCheck;

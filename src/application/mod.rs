mod config;
mod controller;

pub use config::{SimulationConfig, MIN_INTERVAL_MS};
pub use controller::{Mode, SimulationController};

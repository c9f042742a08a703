// Domain layer - Grid, transition rule, patterns
pub mod domain;

// Application layer - Simulation controller and its configuration
pub mod application;

// Presentation layer - macroquad rendering and input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, GenerationDiff, Grid, LifeError, Pattern, presets};
pub use application::{Mode, SimulationConfig, SimulationController, MIN_INTERVAL_MS};

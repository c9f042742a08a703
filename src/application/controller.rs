use std::mem;

use tracing::{debug, info, trace};

use super::config::{SimulationConfig, clamp_interval};
use crate::domain::{Algorithm, Cell, GenerationDiff, Grid, LifeError, Pattern};

/// Whether the simulation is accepting edits or stepping on its own
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Paused,
    Running,
}

/// SimulationController orchestrates the simulation.
/// Edits are accepted while paused; generations are computed while running.
pub struct SimulationController {
    /// Current (committed) generation
    grid: Grid,
    /// Scratch buffer the next generation is written into before the swap
    next: Grid,
    mode: Mode,
    algorithm: Algorithm,
    tick_interval_ms: f64,
    elapsed_since_tick_ms: f64,
    generation_count: u64,
}

impl SimulationController {
    /// Create a paused controller over an all-dead `height` x `width` grid
    pub fn new(height: usize, width: usize, initial_tick_interval_ms: f64) -> Result<Self, LifeError> {
        Self::from_config(SimulationConfig::new(height, width, initial_tick_interval_ms))
    }

    pub fn from_config(config: SimulationConfig) -> Result<Self, LifeError> {
        let grid = Grid::new(config.width, config.height)?;
        info!(
            height = config.height,
            width = config.width,
            tick_interval_ms = config.clamped_interval(),
            "simulation created"
        );
        Ok(Self {
            next: grid.clone(),
            grid,
            mode: Mode::Paused,
            algorithm: config.algorithm,
            tick_interval_ms: config.clamped_interval(),
            elapsed_since_tick_ms: 0.0,
            generation_count: 0,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    /// Grid dimensions as `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn tick_interval_ms(&self) -> f64 {
        self.tick_interval_ms
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Read-only view of the committed generation
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, LifeError> {
        self.grid.get(row, col)
    }

    /// Number of live cells in the committed generation
    pub fn population(&self) -> usize {
        self.grid.count_alive()
    }

    /// Snapshot of live positions, row-major
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.grid.live_cells().collect()
    }

    /// Toggle play/pause state
    pub fn toggle_pause(&mut self) {
        self.mode = match self.mode {
            Mode::Paused => {
                // Stale time from before the pause must not trigger an immediate step
                self.elapsed_since_tick_ms = 0.0;
                Mode::Running
            }
            Mode::Running => Mode::Paused,
        };
        info!(mode = ?self.mode, generation = self.generation_count, "mode changed");
    }

    /// Set the evolution algorithm
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        debug!(algorithm = algorithm.name(), "algorithm changed");
        self.algorithm = algorithm;
    }

    fn ensure_paused(&self, action: &'static str) -> Result<(), LifeError> {
        match self.mode {
            Mode::Paused => Ok(()),
            Mode::Running => Err(LifeError::InvalidOperation { action }),
        }
    }

    /// Bring a cell to life; only while paused
    pub fn set_cell(&mut self, row: usize, col: usize) -> Result<(), LifeError> {
        self.ensure_paused("set a cell")?;
        self.grid.set(row, col, Cell::Alive)?;
        trace!(row, col, "cell set");
        Ok(())
    }

    /// Kill a cell; only while paused
    pub fn clear_cell(&mut self, row: usize, col: usize) -> Result<(), LifeError> {
        self.ensure_paused("clear a cell")?;
        self.grid.set(row, col, Cell::Dead)?;
        trace!(row, col, "cell cleared");
        Ok(())
    }

    /// Stamp a pattern with its top-left corner at `(row, col)`; only while paused
    pub fn place_pattern(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<(), LifeError> {
        self.ensure_paused("place a pattern")?;
        pattern.place_on(&mut self.grid, row, col)?;
        debug!(pattern = pattern.name, row, col, "pattern placed");
        Ok(())
    }

    /// Fill the grid with a random soup and restart the generation count; only while paused
    pub fn randomize(&mut self, density: f64) -> Result<(), LifeError> {
        self.ensure_paused("randomize the grid")?;
        self.grid.randomize(&mut rand::rng(), density);
        self.generation_count = 0;
        info!(density, population = self.population(), "grid randomized");
        Ok(())
    }

    /// Clear grid and reset generation counter, keeping the current mode.
    /// Dimensions are fixed at construction, so clearing restores the configured board.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.next.clear();
        self.generation_count = 0;
        info!(mode = ?self.mode, "simulation reset");
    }

    /// Adjust simulation speed by changing the tick interval
    pub fn adjust_speed(&mut self, delta_ms: f64) {
        self.tick_interval_ms = clamp_interval(self.tick_interval_ms + delta_ms);
        trace!(tick_interval_ms = self.tick_interval_ms, "speed adjusted");
    }

    /// Advance the clock by `elapsed_ms` and compute at most one generation if due.
    /// Extra elapsed intervals are dropped rather than replayed.
    pub fn tick_if_due(&mut self, elapsed_ms: f64) -> Option<GenerationDiff> {
        if self.mode != Mode::Running {
            return None;
        }

        self.elapsed_since_tick_ms += elapsed_ms.max(0.0);
        if self.elapsed_since_tick_ms < self.tick_interval_ms {
            return None;
        }

        let diff = self.advance();
        self.elapsed_since_tick_ms = 0.0;
        self.generation_count += 1;
        debug!(
            generation = self.generation_count,
            changed = diff.len(),
            "generation computed"
        );
        Some(diff)
    }

    /// Compute the next generation into the scratch buffer and swap it in
    fn advance(&mut self) -> GenerationDiff {
        self.grid.step_into(&mut self.next, self.algorithm);
        let diff = self.grid.diff(&self.next);
        mem::swap(&mut self.grid, &mut self.next);
        diff
    }
}

use thiserror::Error;

/// Errors raised by the grid and the simulation controller.
/// All of them are contract violations the caller can avoid by validating input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A grid was requested with a zero width or height
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A cell index lies outside the grid
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// An edit was attempted while the simulation is running
    #[error("cannot {action} while the simulation is running")]
    InvalidOperation { action: &'static str },
}

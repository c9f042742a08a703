mod cell;
mod error;
mod grid;
mod patterns;
mod algorithm;

pub use cell::Cell;
pub use error::LifeError;
pub use grid::{Grid, GenerationDiff};
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;

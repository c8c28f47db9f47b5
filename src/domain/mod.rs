mod cell;
mod engine;
mod error;
mod grid;
mod neighbors;
mod patterns;

pub use cell::{Cell, CellState};
pub use engine::{GenerationStats, advance, next_state};
pub use error::LifeError;
pub use grid::Grid;
pub use neighbors::count_live_neighbors;
pub use patterns::{Pattern, presets};

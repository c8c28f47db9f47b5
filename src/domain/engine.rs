//! One synchronous generation step over the whole padded storage.
//!
//! The step runs in two phases. The stage phase reads every neighbor count
//! from the current generation and records decisions in each cell's staging
//! slot; the commit phase applies them. Nothing changes state until every
//! cell has been decided, so scan order cannot leak into the result.

use super::{CellState, Grid, LifeError, count_live_neighbors};

/// Summary of one generation step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Dead cells staged alive
    pub births: usize,
    /// Live cells staged dead
    pub deaths: usize,
    /// Live cells after the commit
    pub population: usize,
}

/// B3/S23. `None` means the cell keeps its state and nothing is staged.
pub const fn next_state(current: CellState, neighbors: u8) -> Option<CellState> {
    match (current, neighbors) {
        (CellState::Dead, 3) => Some(CellState::Alive),
        (CellState::Alive, n) if n < 2 || n > 3 => Some(CellState::Dead),
        _ => None,
    }
}

/// Advance the grid by one generation
pub fn advance(grid: &mut Grid) -> Result<GenerationStats, LifeError> {
    let mut stats = GenerationStats::default();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let neighbors = count_live_neighbors(grid, row, col)?;
            let cell = grid.storage_cell_at_mut(row, col)?;
            if let Some(next) = next_state(cell.state(), neighbors) {
                match next {
                    CellState::Alive => stats.births += 1,
                    CellState::Dead => stats.deaths += 1,
                }
                cell.stage_next(next);
            }
        }
    }

    grid.cells_mut().for_each(|cell| cell.commit());

    stats.population = grid.population();
    Ok(stats)
}

//! Pointer and clear commands applied straight to the grid.

use super::BoardGeometry;
use crate::domain::{Grid, LifeError};

/// Toggle the cell under the pointer.
///
/// Returns the visible position that was toggled, or `None` when the pointer
/// is outside every cell. Clicking off the board is not an error.
pub fn toggle_at_pointer(
    grid: &mut Grid,
    pointer_x: f32,
    pointer_y: f32,
    geometry: &BoardGeometry,
) -> Result<Option<(usize, usize)>, LifeError> {
    let Some((x, y)) = geometry.cell_at(pointer_x, pointer_y) else {
        return Ok(None);
    };
    grid.visible_cell_at_mut(x, y)?.toggle();
    Ok(Some((x, y)))
}

/// Kill every cell on the board, margin included
pub fn clear_all(grid: &mut Grid) {
    grid.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellState;

    fn setup() -> (Grid, BoardGeometry) {
        (Grid::new(8, 6, 4).unwrap(), BoardGeometry::new(8, 6, 200))
    }

    #[test]
    fn test_toggle_flips_exactly_one_cell() {
        let (mut grid, geometry) = setup();
        let rect = geometry.cell_rect(3, 2).unwrap();

        let hit = toggle_at_pointer(&mut grid, rect.x + 2.0, rect.y + 2.0, &geometry).unwrap();

        assert_eq!(hit, Some((3, 2)));
        assert_eq!(grid.population(), 1);
        assert!(grid.visible_cell_at(3, 2).unwrap().is_alive());
    }

    #[test]
    fn test_second_click_toggles_back() {
        let (mut grid, geometry) = setup();
        let rect = geometry.cell_rect(0, 0).unwrap();
        toggle_at_pointer(&mut grid, rect.x, rect.y, &geometry).unwrap();
        toggle_at_pointer(&mut grid, rect.x, rect.y, &geometry).unwrap();
        assert_eq!(grid.visible_cell_at(0, 0).unwrap().state(), CellState::Dead);
    }

    #[test]
    fn test_click_outside_is_silent() {
        let (mut grid, geometry) = setup();
        assert_eq!(toggle_at_pointer(&mut grid, 1.0, 1.0, &geometry), Ok(None));
        assert_eq!(toggle_at_pointer(&mut grid, 5000.0, 20.0, &geometry), Ok(None));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_clear_all() {
        let (mut grid, _) = setup();
        grid.storage_cell_at_mut(0, 0).unwrap().toggle();
        grid.visible_cell_at_mut(4, 4).unwrap().toggle();
        clear_all(&mut grid);
        assert_eq!(grid.population(), 0);
    }
}

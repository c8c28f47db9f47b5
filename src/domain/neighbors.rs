use super::{Grid, LifeError};

/// Offsets of the Moore neighborhood: 4 orthogonal + 4 diagonal
#[rustfmt::skip]
const MOORE: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Count live neighbors of a storage position.
///
/// Positions outside the padded storage do not contribute: the storage edge
/// is a hard wall, there is no wraparound. Errors only if `(row, col)`
/// itself lies outside storage.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8, LifeError> {
    grid.storage_cell_at(row, col)?;

    let count = MOORE
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            grid.storage_cell_at(r, c).ok()
        })
        .filter(|cell| cell.is_alive())
        .count();

    Ok(count as u8)
}

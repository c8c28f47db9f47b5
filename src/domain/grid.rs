use super::{Cell, CellState, LifeError};

/// Upper bound on storage cells, margin included
pub const MAX_CELLS: usize = 1 << 26;

/// Grid owns every cell of the board, including a padding margin around
/// the visible window so patterns have room to grow before they hit the edge.
///
/// Storage is `(height + margin) x (width + margin)`; the visible window
/// starts at `margin / 2` on both axes. The margin is finite: the outer
/// storage edge is a hard wall, exactly like the visible edge would be.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    padding_margin: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead.
    /// Fails if a side is zero or the padded storage exceeds [`MAX_CELLS`].
    pub fn new(width: usize, height: usize, padding_margin: usize) -> Result<Self, LifeError> {
        let invalid = LifeError::InvalidDimension {
            width,
            height,
            padding_margin,
        };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let cell_count = height
            .checked_add(padding_margin)
            .zip(width.checked_add(padding_margin))
            .and_then(|(rows, cols)| rows.checked_mul(cols))
            .filter(|&count| count <= MAX_CELLS)
            .ok_or(invalid)?;
        Ok(Self {
            width,
            height,
            padding_margin,
            cells: vec![Cell::default(); cell_count],
        })
    }

    /// Visible dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn padding_margin(&self) -> usize {
        self.padding_margin
    }

    /// Storage rows, margin included
    pub const fn rows(&self) -> usize {
        self.height + self.padding_margin
    }

    /// Storage columns, margin included
    pub const fn cols(&self) -> usize {
        self.width + self.padding_margin
    }

    /// Offset of the visible window inside storage, on both axes
    pub const fn visible_offset(&self) -> usize {
        self.padding_margin / 2
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols() + col
    }

    fn check_storage(&self, row: usize, col: usize) -> Result<usize, LifeError> {
        if row < self.rows() && col < self.cols() {
            Ok(self.get_index(row, col))
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    fn check_visible(&self, x: usize, y: usize) -> Result<usize, LifeError> {
        if x < self.width && y < self.height {
            let offset = self.visible_offset();
            Ok(self.get_index(y + offset, x + offset))
        } else {
            Err(LifeError::OutOfBounds {
                row: y,
                col: x,
                rows: self.height,
                cols: self.width,
            })
        }
    }

    /// Cell at a screen position `(x, y)` of the visible window
    pub fn visible_cell_at(&self, x: usize, y: usize) -> Result<&Cell, LifeError> {
        let idx = self.check_visible(x, y)?;
        Ok(&self.cells[idx])
    }

    pub fn visible_cell_at_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, LifeError> {
        let idx = self.check_visible(x, y)?;
        Ok(&mut self.cells[idx])
    }

    /// Cell at a raw storage position, margin included
    pub fn storage_cell_at(&self, row: usize, col: usize) -> Result<&Cell, LifeError> {
        let idx = self.check_storage(row, col)?;
        Ok(&self.cells[idx])
    }

    pub fn storage_cell_at_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, LifeError> {
        let idx = self.check_storage(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// Kill every cell, margin included
    pub fn clear(&mut self) {
        self.cells
            .iter_mut()
            .for_each(|cell| cell.reset(CellState::Dead));
    }

    /// Fill the whole storage at random, each cell alive with probability `alive`.
    /// The probability is clamped to `[0, 1]`; NaN or infinite means all dead.
    pub fn randomize(&mut self, alive: f64) {
        use rand::Rng;

        let alive = if alive.is_finite() {
            alive.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|cell| {
            let state = if rng.random_bool(alive) {
                CellState::Alive
            } else {
                CellState::Dead
            };
            cell.reset(state);
        });
    }

    /// Number of live cells over the whole storage
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate the visible window row by row as `(x, y, state)`
    pub fn visible_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let offset = self.visible_offset();
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(move |(x, y)| (x, y, self.cells[self.get_index(y + offset, x + offset)].state()))
    }

    /// Iterate every storage cell mutably, row-major
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}

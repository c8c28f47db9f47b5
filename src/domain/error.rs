use std::{error::Error, fmt};

/// Invariant violations raised by the grid model.
///
/// None of these are expected at runtime: a correctly wired board never
/// triggers them through its public operations. They surface programming
/// mistakes (bad coordinates, bad dimensions) instead of being retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Width or height of zero at grid creation, or a padded storage
    /// too large to allocate.
    InvalidDimension {
        width: usize,
        height: usize,
        padding_margin: usize,
    },
    /// Raw value that is neither DEAD (0) nor ALIVE (1).
    InvalidState(u8),
    /// Access outside the addressed region (`rows` x `cols`).
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::InvalidDimension {
                width,
                height,
                padding_margin,
            } => write!(
                f,
                "invalid grid dimensions {}x{} with margin {}",
                width, height, padding_margin
            ),
            LifeError::InvalidState(value) => {
                write!(f, "cell state must be 0 (dead) or 1 (alive), got {}", value)
            }
            LifeError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "position (row {}, col {}) is outside {}x{} cells",
                row, col, rows, cols
            ),
        }
    }
}

impl Error for LifeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = LifeError::OutOfBounds {
            row: 7,
            col: 3,
            rows: 5,
            cols: 5,
        };
        assert_eq!(err.to_string(), "position (row 7, col 3) is outside 5x5 cells");

        let err = LifeError::InvalidDimension {
            width: 0,
            height: 4,
            padding_margin: 2,
        };
        assert_eq!(err.to_string(), "invalid grid dimensions 0x4 with margin 2");
    }
}

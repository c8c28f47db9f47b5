use super::LifeError;

/// The two states a cell can be in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// The opposite state
    pub const fn toggled(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

/// Raw scalar encoding: 0 is dead, 1 is alive. Anything else is rejected.
impl TryFrom<u8> for CellState {
    type Error = LifeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            other => Err(LifeError::InvalidState(other)),
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Dead => 0,
            CellState::Alive => 1,
        }
    }
}

/// Cell is the fundamental unit of the board.
/// Besides its current state it carries a staging slot for the next
/// generation, so a full pass can decide every cell before any of them change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    state: CellState,
    pending: Option<CellState>,
}

impl Cell {
    pub const fn new(state: CellState) -> Self {
        Self {
            state,
            pending: None,
        }
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    pub const fn pending(&self) -> Option<CellState> {
        self.pending
    }

    pub const fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// Overwrite the current state
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Flip alive <-> dead
    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
    }

    /// Record the next state without touching the current one
    pub fn stage_next(&mut self, state: CellState) {
        self.pending = Some(state);
    }

    /// Apply the staged state, if any, and empty the slot.
    /// Calling it again with nothing staged leaves the cell untouched.
    pub fn commit(&mut self) {
        if let Some(next) = self.pending.take() {
            self.state = next;
        }
    }

    /// Overwrite the state and drop any staged value
    pub(crate) fn reset(&mut self, state: CellState) {
        self.state = state;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_dead_and_unstaged() {
        let cell = Cell::default();
        assert_eq!(cell.state(), CellState::Dead);
        assert_eq!(cell.pending(), None);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        let mut cell = Cell::default();
        cell.toggle();
        assert!(cell.is_alive());
        cell.toggle();
        assert!(!cell.is_alive());
    }

    #[test]
    fn test_stage_does_not_touch_state() {
        let mut cell = Cell::new(CellState::Alive);
        cell.stage_next(CellState::Dead);
        assert_eq!(cell.state(), CellState::Alive);
        assert_eq!(cell.pending(), Some(CellState::Dead));
    }

    #[test]
    fn test_commit_applies_and_clears() {
        let mut cell = Cell::default();
        cell.stage_next(CellState::Alive);
        cell.commit();
        assert_eq!(cell.state(), CellState::Alive);
        assert_eq!(cell.pending(), None);
    }

    #[test]
    fn test_commit_without_stage_is_idempotent() {
        let mut cell = Cell::new(CellState::Alive);
        cell.commit();
        assert_eq!(cell.state(), CellState::Alive);
        cell.commit();
        assert_eq!(cell.state(), CellState::Alive);

        let mut cell = Cell::default();
        cell.stage_next(CellState::Alive);
        cell.commit();
        cell.commit();
        assert_eq!(cell.state(), CellState::Alive);
    }

    #[test]
    fn test_set_state_overwrites() {
        let mut cell = Cell::default();
        cell.set_state(CellState::Alive);
        assert_eq!(cell.state(), CellState::Alive);
    }

    #[test]
    fn test_raw_state_conversion() {
        assert_eq!(CellState::try_from(0), Ok(CellState::Dead));
        assert_eq!(CellState::try_from(1), Ok(CellState::Alive));
        assert_eq!(CellState::try_from(2), Err(LifeError::InvalidState(2)));
        assert_eq!(u8::from(CellState::Alive), 1);
    }
}

mod game_state;
mod geometry;
pub mod interaction;

pub use game_state::{GameState, RunMode};
pub use geometry::{BASE_CELL_SIZE, BOARD_TOP_MARGIN, BoardGeometry, HitRegion, MAX_ZOOM, ZOOM_STEP};

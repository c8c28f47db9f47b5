use macroquad::prelude::*;
use tracing::{debug, warn};

use crate::application::GameState;
use crate::domain::{LifeError, presets};

/// Pattern hotkeys, in `presets::all_patterns()` order
const PATTERN_KEYS: [KeyCode; 6] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
];

/// Toggle the cell under the pointer when the left button is released
pub fn handle_pointer(state: &mut GameState) -> Result<(), LifeError> {
    if !is_mouse_button_released(MouseButton::Left) {
        return Ok(());
    }
    let (px, py) = mouse_position();
    if let Some((x, y)) = state.pointer_up(px, py)? {
        debug!(x, y, queued = state.is_running(), "cell toggled");
    }
    Ok(())
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(state: &mut GameState) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        state.zoom_in();
    } else if wheel < 0.0 {
        state.zoom_out();
    }
}

/// Process keyboard input
pub fn process_keyboard_input(state: &mut GameState) {
    type KeyAction = (KeyCode, fn(&mut GameState));

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::Delete, GameState::clear),
        (KeyCode::R, GameState::randomize),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_released(*key))
        .for_each(|(_, action)| action(state));

    let patterns = presets::all_patterns();
    for (key, pattern) in PATTERN_KEYS.iter().zip(&patterns) {
        if !is_key_released(*key) {
            continue;
        }
        match state.place_pattern(pattern) {
            Ok(true) => debug!(pattern = pattern.name, "pattern placed"),
            Ok(false) => debug!(pattern = pattern.name, "pause before placing patterns"),
            Err(err) => warn!(pattern = pattern.name, %err, "pattern does not fit the board"),
        }
    }
}

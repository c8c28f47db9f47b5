use std::sync::OnceLock;

use macroquad::prelude::*;
use padded_life::{Config, GameState, init_tracing, input, rendering};
use tracing::{error, info, warn};

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Loaded once; a broken config file falls back to defaults
fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let path = Config::default_path();
        match Config::load(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(%path, %err, "using default configuration");
                Config::default()
            }
        }
    })
}

fn window_conf() -> Conf {
    init_tracing();
    let (window_width, window_height) = config().window_size();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();
    let mut state = match GameState::from_config(config) {
        Ok(state) => state,
        Err(err) => {
            error!(%err, "cannot create board");
            std::process::exit(1);
        }
    };

    info!(
        width = state.grid.width(),
        height = state.grid.height(),
        padding_margin = state.grid.padding_margin(),
        cells = state.grid.cell_count(),
        "board ready"
    );

    loop {
        if let Err(err) = input::handle_pointer(&mut state) {
            error!(%err, "pointer edit failed");
            std::process::exit(1);
        }
        input::handle_zoom(&mut state);
        input::process_keyboard_input(&mut state);

        if let Err(err) = state.tick() {
            error!(%err, generation = state.generation, "generation step failed");
            std::process::exit(1);
        }

        clear_background(Color::from_rgba(30, 30, 30, 255));
        rendering::draw_grid(&state.grid, &state.geometry);
        rendering::draw_status(&state);

        next_frame().await;
    }
}

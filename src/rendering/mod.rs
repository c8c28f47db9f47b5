use macroquad::prelude::*;

use crate::application::{BoardGeometry, GameState};
use crate::domain::{CellState, Grid};

const DEAD_COLOR: Color = LIGHTGRAY;
const ALIVE_COLOR: Color = BLACK;
const BORDER_COLOR: Color = WHITE;
const GRID_LINE_COLOR: Color = Color::new(0.7, 0.7, 0.7, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Paint the visible window of the grid.
/// Cell rectangles come from the same geometry hit-testing uses.
pub fn draw_grid(grid: &Grid, geometry: &BoardGeometry) {
    let surface = geometry.surface();
    draw_rectangle(surface.x, surface.y, surface.w, surface.h, BORDER_COLOR);

    let draw_grid_lines = geometry.pitch() >= 8.0;

    for (x, y, state) in grid.visible_cells() {
        let Some(rect) = geometry.cell_rect(x, y) else {
            continue;
        };
        let color = match state {
            CellState::Alive => ALIVE_COLOR,
            CellState::Dead => DEAD_COLOR,
        };
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
        if draw_grid_lines {
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, GRID_LINE_COLOR);
        }
    }
}

/// Status line and key help under the board
pub fn draw_status(state: &GameState) {
    let surface = state.geometry.surface();
    let x = surface.x;
    let y = surface.y + surface.h + 24.0;

    let (status, status_color) = if state.is_running() {
        ("Running", Color::from_rgba(0, 200, 0, 255))
    } else {
        ("Editing", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text(status, x, y, 22.0, status_color);

    let info = format!(
        "Generation: {}   Population: {}   Zoom: {}   Evolve: {:.1}ms",
        state.generation,
        format_number(state.grid.population()),
        state.geometry.zoom(),
        state.last_evolution_time_ms,
    );
    draw_text(&info, x + 110.0, y, 18.0, WHITE);

    draw_text(
        "Click: toggle   Space: run/pause   Del: clear   R: random   1-6: pattern   Wheel: zoom",
        x,
        y + 22.0,
        16.0,
        GRAY,
    );
}

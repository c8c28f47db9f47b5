use std::mem;

use tracing::debug;

use super::{BoardGeometry, interaction};
use crate::config::Config;
use crate::domain::{GenerationStats, Grid, LifeError, Pattern, advance};

/// Whether generations are being advanced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Paused; edits apply immediately
    #[default]
    Editing,
    /// One generation per tick; edits are queued until the next tick
    Running,
}

/// GameState orchestrates the simulation.
/// It owns the grid and the run state, so the whole loop can be driven
/// without a window.
pub struct GameState {
    pub grid: Grid,
    pub geometry: BoardGeometry,
    pub mode: RunMode,
    pub generation: u64,
    pub last_stats: GenerationStats,
    pub last_evolution_time_ms: f32,
    /// Alive probability for [`GameState::randomize`]
    pub random_fill: f64,
    /// Cells clicked while running, applied before the next generation
    pending_toggles: Vec<(usize, usize)>,
}

impl GameState {
    /// Create new game state for a `width` x `height` visible board
    pub fn new(
        width: usize,
        height: usize,
        padding_margin: usize,
        window_width: u32,
    ) -> Result<Self, LifeError> {
        Ok(Self {
            grid: Grid::new(width, height, padding_margin)?,
            geometry: BoardGeometry::new(width, height, window_width),
            mode: RunMode::Editing,
            generation: 0,
            last_stats: GenerationStats::default(),
            last_evolution_time_ms: 0.0,
            random_fill: Config::default().random_fill,
            pending_toggles: Vec::new(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LifeError> {
        let (width, height) = config.board_dimensions();
        let window_width = config.window_size().0.unsigned_abs();
        let mut state = Self::new(width, height, config.padding_margin, window_width)?;
        state.random_fill = config.random_fill;
        Ok(state)
    }

    pub fn is_running(&self) -> bool {
        self.mode == RunMode::Running
    }

    /// Toggles waiting for the next tick
    pub fn pending_toggles(&self) -> &[(usize, usize)] {
        &self.pending_toggles
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        self.mode = match self.mode {
            RunMode::Editing => RunMode::Running,
            RunMode::Running => RunMode::Editing,
        };
        debug!(mode = ?self.mode, generation = self.generation, "run mode changed");
    }

    /// Pointer released at window pixel `(px, py)`.
    ///
    /// While editing the cell flips right away. While running, the cell is
    /// resolved now, against the board as currently laid out, and flipped
    /// just before the next generation.
    pub fn pointer_up(&mut self, px: f32, py: f32) -> Result<Option<(usize, usize)>, LifeError> {
        match self.mode {
            RunMode::Editing => {
                interaction::toggle_at_pointer(&mut self.grid, px, py, &self.geometry)
            }
            RunMode::Running => {
                let hit = self.geometry.cell_at(px, py);
                if let Some(cell) = hit {
                    self.pending_toggles.push(cell);
                }
                Ok(hit)
            }
        }
    }

    /// Clear grid, drop queued edits and go back to editing
    pub fn clear(&mut self) {
        interaction::clear_all(&mut self.grid);
        self.pending_toggles.clear();
        self.generation = 0;
        self.last_stats = GenerationStats::default();
        self.mode = RunMode::Editing;
    }

    /// Randomize grid and go back to editing
    pub fn randomize(&mut self) {
        self.grid.randomize(self.random_fill);
        self.pending_toggles.clear();
        self.generation = 0;
        self.last_stats = GenerationStats::default();
        self.mode = RunMode::Editing;
    }

    /// Stamp a pattern in the middle of the board. Ignored while running.
    pub fn place_pattern(&mut self, pattern: &Pattern) -> Result<bool, LifeError> {
        if self.is_running() {
            return Ok(false);
        }
        let (x, y) = pattern.centered_origin(&self.grid);
        pattern.place_on(&mut self.grid, x, y)?;
        Ok(true)
    }

    pub fn zoom_in(&mut self) {
        self.geometry.zoom_in();
        debug!(zoom = self.geometry.zoom(), "zoom");
    }

    pub fn zoom_out(&mut self) {
        self.geometry.zoom_out();
        debug!(zoom = self.geometry.zoom(), "zoom");
    }

    /// Advance by one generation if running.
    /// Queued edits land first, so they take part in this generation.
    pub fn tick(&mut self) -> Result<(), LifeError> {
        if !self.is_running() {
            return Ok(());
        }

        for (x, y) in mem::take(&mut self.pending_toggles) {
            self.grid.visible_cell_at_mut(x, y)?.toggle();
        }

        let start = std::time::Instant::now();
        self.last_stats = advance(&mut self.grid)?;
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;

        debug!(
            generation = self.generation,
            births = self.last_stats.births,
            deaths = self.last_stats.deaths,
            population = self.last_stats.population,
            "generation advanced"
        );
        Ok(())
    }
}

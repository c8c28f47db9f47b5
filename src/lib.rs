// Domain layer - grid model and generation step
pub mod domain;

// Application layer - run state, board geometry, pointer edits
pub mod application;

pub mod config;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellState, Grid, LifeError, Pattern, advance, count_live_neighbors, presets};
pub use application::{BoardGeometry, GameState, RunMode};
pub use config::{Config, ConfigError};

/// Install the `tracing` subscriber. `RUST_LOG` overrides the default `info`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

//! Startup configuration.
//!
//! Loaded once from an optional JSON file; every field has a default so a
//! missing file, or a file that sets only a few keys, is fine.

use serde::Deserialize;
use std::{error::Error, fmt, fs, io, path::Path};

use crate::application::BASE_CELL_SIZE;

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "life.json";

/// Environment variable overriding [`DEFAULT_CONFIG_PATH`]
pub const CONFIG_PATH_ENV: &str = "LIFE_CONFIG";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    /// Share of the window width left outside the board, in percent
    pub width_reduce_percentage: u32,
    /// Share of the window height left outside the board, in percent
    pub height_reduce_percentage: u32,
    /// Extra storage rows and columns around the visible board
    pub padding_margin: usize,
    /// Alive probability used by the randomize command
    pub random_fill: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            width_reduce_percentage: 10,
            height_reduce_percentage: 15,
            padding_margin: 50,
            random_fill: 0.3,
        }
    }
}

impl Config {
    /// Read config from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path.as_ref()) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(ConfigError::Io(err)),
        };
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Path from `LIFE_CONFIG`, or `life.json`
    pub fn default_path() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned())
    }

    /// Window size in pixels as the windowing layer takes it.
    /// A side that does not fit in `i32` falls back to its default.
    pub fn window_size(&self) -> (i32, i32) {
        let defaults = Config::default();
        let side = |value: u32, default: u32| {
            i32::try_from(value)
                .or_else(|_| i32::try_from(default))
                .unwrap_or(i32::MAX)
        };
        (
            side(self.window_width, defaults.window_width),
            side(self.window_height, defaults.window_height),
        )
    }

    /// Visible board size in cells, derived from the window size
    pub fn board_dimensions(&self) -> (usize, usize) {
        let (width, height) = self.window_size();
        let reduce = |total: i32, percent: u32| {
            let total = total.unsigned_abs() as usize;
            (total - total * percent.min(100) as usize / 100) / BASE_CELL_SIZE
        };
        (
            reduce(width, self.width_reduce_percentage),
            reduce(height, self.height_reduce_percentage),
        )
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {}", e),
            ConfigError::Parse(e) => write!(f, "malformed config: {}", e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("definitely/not/here/life.json").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = Config::from_json(r#"{ "padding_margin": 8, "window_width": 600 }"#).unwrap();
        assert_eq!(config.padding_margin, 8);
        assert_eq!(config.window_width, 600);
        assert_eq!(config.window_height, Config::default().window_height);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Config::from_json("{ padding_margin: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_board_dimensions() {
        let config = Config::default();
        // (1280 - 128) / 12 = 96, (720 - 108) / 12 = 51
        assert_eq!(config.board_dimensions(), (96, 51));
    }

    #[test]
    fn test_window_size_out_of_i32_range_uses_default() {
        let raw = r#"{ "window_width": 4294967295, "window_height": 500 }"#;
        let config = Config::from_json(raw).unwrap();
        assert_eq!(config.window_size(), (1280, 500));
        // Board follows the window that is actually opened
        assert_eq!(config.board_dimensions().0, 96);
    }

    #[test]
    fn test_tiny_window_gives_empty_board() {
        let config = Config {
            window_width: 10,
            ..Config::default()
        };
        assert_eq!(config.board_dimensions().0, 0);
    }
}

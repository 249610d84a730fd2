//! Replay settings for inkreplay
//!
//! This crate holds everything the host reads at startup: the pixel offsets
//! cut from the paper, how much of a document is drawn when it is opened, and
//! logging. Settings are read from a JSON file; anything missing falls back to
//! the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default horizontal offset in pixels
pub const DEFAULT_X_OFFSET: i32 = 0;

/// Default vertical offset in pixels
pub const DEFAULT_Y_OFFSET: i32 = 0;

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// How many traces are drawn when a document is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InitialSteps {
    /// Blank canvas
    None,
    /// Every trace
    #[default]
    All,
}

impl InitialSteps {
    /// Playback position for a document with `trace_count` traces.
    pub fn position(self, trace_count: usize) -> usize {
        match self {
            InitialSteps::None => 0,
            InitialSteps::All => trace_count,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "ink=debug,warn")
    pub level: String,
    /// Emit JSON lines instead of plain text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

/// Top-level replay settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Columns cut from the left of the paper; also shifts every stroke left
    pub x_offset: i32,
    /// Rows cut from the bottom of the canvas
    pub y_offset: i32,
    /// Playback position after opening a document
    pub initial_steps: InitialSteps,
    pub logging: LoggingConfig,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            x_offset: DEFAULT_X_OFFSET,
            y_offset: DEFAULT_Y_OFFSET,
            initial_steps: InitialSteps::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ReplayConfig {
    /// Load settings from `path`, falling back to defaults.
    ///
    /// A missing file is not an error. An unreadable or invalid file is
    /// logged and ignored.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    warn!("Failed to parse config at {:?}: {}", path, e);
                }
            },
            Err(e) => {
                warn!("Failed to read config at {:?}: {}", path, e);
            }
        }
        Self::default()
    }

    /// `(x_offset, y_offset)`
    pub fn offsets(&self) -> (i32, i32) {
        (self.x_offset, self.y_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ReplayConfig::default();
        assert_eq!(config.offsets(), (DEFAULT_X_OFFSET, DEFAULT_Y_OFFSET));
        assert_eq!(config.initial_steps, InitialSteps::All);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_initial_steps_position() {
        assert_eq!(InitialSteps::None.position(12), 0);
        assert_eq!(InitialSteps::All.position(12), 12);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"x_offset": 4, "initial_steps": "NONE"}}"#).unwrap();

        let config = ReplayConfig::load_from(file.path());
        assert_eq!(config.offsets(), (4, 0));
        assert_eq!(config.initial_steps, InitialSteps::None);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReplayConfig::load_from(dir.path().join("replay.json"));
        assert_eq!(config, ReplayConfig::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"initial_steps": "SOME"}}"#).unwrap();
        assert_eq!(ReplayConfig::load_from(file.path()), ReplayConfig::default());
    }

    #[test]
    fn test_round_trip_names() {
        let json = serde_json::to_string(&ReplayConfig::default()).unwrap();
        assert!(json.contains(r#""initial_steps":"ALL""#));
    }
}

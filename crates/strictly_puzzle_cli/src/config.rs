//! Puzzle configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the puzzle front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Side length of new puzzles.
    #[serde(default = "default_size")]
    size: usize,

    /// Where the current puzzle is saved.
    #[serde(default = "default_state_file")]
    state_file: PathBuf,

    /// Seed for reproducible shuffles.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_size() -> usize {
    4
}

#[instrument]
fn default_state_file() -> PathBuf {
    PathBuf::from("puzzle.json")
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            state_file: default_state_file(),
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or the defaults if there is no such file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        state_file: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(state_file) = state_file {
            self.state_file = state_file;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

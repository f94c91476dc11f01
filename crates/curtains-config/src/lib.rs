use std::path::{Path, PathBuf};

use curtains_engine::Limits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the optional config file looked up beside the input document.
pub const CONFIG_FILE_NAME: &str = "curtains.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Optional presentation settings; anything absent falls back to defaults
/// or command-line flags.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Option<String>,
    pub output: Option<PathBuf>,
    pub max_slides: Option<usize>,
    pub max_nesting_depth: Option<usize>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Loads `curtains.toml` from the directory holding the input document.
    pub fn load_beside<P: AsRef<Path>>(input: P) -> Result<Option<Self>, ConfigError> {
        let dir = input.as_ref().parent().unwrap_or_else(|| Path::new("."));
        Self::load_from_path(dir.join(CONFIG_FILE_NAME))
    }

    /// Engine limits with config overrides applied over the defaults.
    pub fn limits(&self) -> Limits {
        let defaults = Limits::default();
        Limits {
            max_slides: self.max_slides.unwrap_or(defaults.max_slides),
            max_nesting_depth: self
                .max_nesting_depth
                .unwrap_or(defaults.max_nesting_depth),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::{path::Path, path::PathBuf, str::FromStr};
use thiserror::Error;
use tracing::Level;

/// Configuration for the terminal front-end, read from YAML.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// File the session snapshot is loaded from and saved to after every change.
    #[serde(default)]
    pub session_path: Option<String>,
    /// Ask before clearing the session.
    #[serde(default = "default_confirm_reset")]
    pub confirm_reset: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            session_path: None,
            confirm_reset: default_confirm_reset(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
}

pub struct ValidatedConfig {
    pub log_level: Level,
    pub session_path: Option<PathBuf>,
    pub confirm_reset: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_confirm_reset() -> bool {
    true
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        let log_level =
            Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            })?;

        Ok(ValidatedConfig {
            log_level,
            session_path: self.session_path.map(PathBuf::from),
            confirm_reset: self.confirm_reset,
        })
    }
}

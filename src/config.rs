//! Configuration management
//!
//! Settings come from a TOML file and are then overridden by command-line
//! flags. The file is looked up in this order:
//!
//! 1. the path given with `--config` (must exist)
//! 2. `./secret-santa.toml`
//! 3. the user config dir, see [`paths::global_config`]
//!
//! If none exists, built-in defaults are used.
//!
//! ```toml
//! names_file = "students.txt"
//!
//! [server]
//! bind = "0.0.0.0"
//! port = 8080
//! workers = 4
//!
//! [draw]
//! seed = 42
//! max_attempts = 10000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pairing::{DEFAULT_MAX_ATTEMPTS, PairingOptions};
use crate::paths;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// TOML error
        source: toml::de::Error,
    },

    /// A value is out of range
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Roster file, one name per line
    #[serde(default = "default_names_file")]
    pub names_file: PathBuf,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Draw settings
    #[serde(default)]
    pub draw: DrawConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_bind")]
    pub bind: String,
    /// TCP port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request-handling threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Draw settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Fixed RNG seed; OS entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Reshuffle cap before the rotation fallback (`0` = unbounded)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_names_file() -> PathBuf {
    PathBuf::from(paths::DEFAULT_NAMES_FILE)
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

const fn default_workers() -> usize {
    4
}

const fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            names_file: default_names_file(),
            server: ServerConfig::default(),
            draw: DrawConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_attempts: default_max_attempts(),
        }
    }
}

/// Values given on the command line, applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--names`
    pub names_file: Option<PathBuf>,
    /// `--bind`
    pub bind: Option<String>,
    /// `--port`
    pub port: Option<u16>,
    /// `--workers`
    pub workers: Option<usize>,
    /// `--seed`
    pub seed: Option<u64>,
}

impl Config {
    /// Load config using the standard lookup order.
    ///
    /// `explicit` is the `--config` path; it is an error for it not to exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for candidate in [paths::local_config(), paths::global_config()] {
            if candidate.exists() {
                return Self::from_file(&candidate);
            }
        }

        log::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load and validate a specific config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text without validating it
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.workers == 0 {
            return Err(ConfigError::Invalid("server.workers must be at least 1".to_string()));
        }
        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::Invalid("server.bind cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Apply command-line overrides, then re-validate
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(names_file) = &overrides.names_file {
            self.names_file.clone_from(names_file);
        }
        if let Some(bind) = &overrides.bind {
            self.server.bind.clone_from(bind);
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(workers) = overrides.workers {
            self.server.workers = workers;
        }
        if overrides.seed.is_some() {
            self.draw.seed = overrides.seed;
        }
        self.validate()?;
        Ok(self)
    }

    /// Socket address string for the server
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }

    /// Options for the pairing generator
    #[must_use]
    pub const fn pairing_options(&self) -> PairingOptions {
        PairingOptions {
            max_attempts: self.draw.max_attempts,
        }
    }
}

//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. An explicit path (`--config`), which must exist
//! 2. `$PICMETA_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/picmeta/config.toml`
//! 4. `~/.picmeta/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use picmeta::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Default labels: {:?}", config.default_labels());
//! println!("Format: {:?}", config.format());
//! ```

pub mod schema;

pub use schema::{FileConfig, OutputFormat};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "PICMETA_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("config file '{0}' does not exist")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Where to look for a config file.
///
/// Captured once from the environment so loading itself stays pure and
/// testable.
#[derive(Debug, Clone, Default)]
pub struct ConfigSearch {
    /// Value of `$PICMETA_CONFIG`
    pub env_path: Option<PathBuf>,
    /// Value of `$XDG_CONFIG_HOME`
    pub xdg_config_home: Option<PathBuf>,
    /// The user's home directory
    pub home: Option<PathBuf>,
}

impl ConfigSearch {
    /// Capture the search locations from the process environment.
    pub fn from_env() -> Self {
        Self {
            env_path: std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            xdg_config_home: std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            home: dirs::home_dir(),
        }
    }

    /// Candidate paths in precedence order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(path) = &self.env_path {
            paths.push(path.clone());
        }
        if let Some(xdg) = &self.xdg_config_home {
            paths.push(xdg.join("picmeta/config.toml"));
        }
        if let Some(home) = &self.home {
            paths.push(home.join(".picmeta/config.toml"));
        }
        paths
    }
}

/// Loaded configuration.
///
/// Accessor methods apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub file: FileConfig,
    /// Path the file was loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Wrap already-parsed file contents.
    pub fn from_file(file: FileConfig) -> Self {
        Self { file, path: None }
    }

    /// Load configuration from `explicit` or the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` does not exist, or if a config file
    /// exists but cannot be read, parsed, or validated. Missing files in
    /// the default locations are not an error (defaults are used).
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        Self::load_with(explicit, &ConfigSearch::from_env())
    }

    /// Load configuration using the given search locations.
    pub fn load_with(explicit: Option<&Path>, search: &ConfigSearch) -> Result<Config, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::read(path);
        }

        if let Some(path) = &search.env_path {
            if !path.exists() {
                log::warn!(
                    "${} points to '{}', which does not exist; ignoring",
                    CONFIG_ENV,
                    path.display()
                );
            }
        }

        match search.candidates().into_iter().find(|p| p.exists()) {
            Some(path) => Self::read(&path),
            None => Ok(Config::default()),
        }
    }

    /// Read, parse and validate one config file.
    fn read(path: &Path) -> Result<Config, ConfigError> {
        log::debug!("loading config from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Config {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Labels used when none are given on the command line.
    ///
    /// Defaults to none (match everything).
    pub fn default_labels(&self) -> &[String] {
        self.file.default_labels.as_deref().unwrap_or(&[])
    }

    /// Output format.
    ///
    /// Defaults to JSON.
    pub fn format(&self) -> OutputFormat {
        self.file.format.unwrap_or_default()
    }

    /// Whether thumbnail fields are exposed.
    ///
    /// Defaults to `false`.
    pub fn include_thumbnail(&self) -> bool {
        self.file.include_thumbnail.unwrap_or(false)
    }

    /// Path of the loaded config file, if any.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

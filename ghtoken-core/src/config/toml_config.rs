//! TOML configuration file I/O
//!
//! Handles loading configuration from TOML files in the user's
//! configuration directory.

use crate::config::{Config, TokenConfig, DEFAULT_TOKEN_FILE};
use crate::error::{ConfigError, GhTokenError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

fn home_dir() -> Result<PathBuf, GhTokenError> {
    std::env::var("HOME").map(PathBuf::from).map_err(|_| {
        GhTokenError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })
}

/// Get the default configuration directory
///
/// Returns ~/.config/ghtoken, or GHTOKEN_CONFIG_DIR environment variable if set
pub fn get_config_dir() -> Result<PathBuf, GhTokenError> {
    // Allow tests to override config directory via environment variable
    if let Ok(config_dir) = std::env::var("GHTOKEN_CONFIG_DIR") {
        return Ok(PathBuf::from(config_dir));
    }

    Ok(home_dir()?.join(".config").join("ghtoken"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, GhTokenError> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Where the token is cached: the configured path or `$HOME/.github-token.json`
pub fn resolve_token_path(token: &TokenConfig) -> Result<PathBuf, GhTokenError> {
    match token.path {
        Some(ref path) => Ok(path.clone()),
        None => Ok(home_dir()?.join(DEFAULT_TOKEN_FILE)),
    }
}

/// Load configuration from the default TOML file
///
/// A missing file is not an error; defaults are used instead.
pub fn load_config() -> Result<Config, GhTokenError> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        debug!(path = %config_path.display(), "No configuration file, using defaults");
        return Ok(Config::default());
    }

    load_config_from_path(&config_path)
}

/// Load configuration from a specific TOML file
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<Config, GhTokenError> {
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GhTokenError::Config(ConfigError::LoadFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        }),
        _ => GhTokenError::Config(ConfigError::IoError {
            message: format!("Failed to read config file: {}", e),
        }),
    })?;

    let config: Config = toml::from_str(&contents).map_err(|e| {
        GhTokenError::Config(ConfigError::Parse {
            message: e.to_string(),
        })
    })?;

    // Validate the loaded configuration
    config
        .validate()
        .map_err(|e| GhTokenError::Config(ConfigError::ValidationError { message: e }))?;

    debug!(path = %path.as_ref().display(), "Loaded configuration");
    Ok(config)
}

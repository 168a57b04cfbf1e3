//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

use ghtoken_core::config::{toml_config, Config};
use ghtoken_core::error::{ConfigError, GhTokenError};

pub mod token;

/// Command line values that take precedence over the configuration file
#[derive(Debug, Default)]
pub struct Overrides {
    pub token_file: Option<std::path::PathBuf>,
    pub note: Option<String>,
    pub scopes: Vec<String>,
    pub api_root: Option<String>,
}

impl Overrides {
    /// Apply the overrides on top of `config` and re-validate
    pub fn apply(&self, mut config: Config) -> Result<Config, GhTokenError> {
        if let Some(ref path) = self.token_file {
            config.token.path = Some(path.clone());
        }
        if let Some(ref note) = self.note {
            config.token.note = note.clone();
        }
        if !self.scopes.is_empty() {
            config.token.scopes = self.scopes.clone();
        }
        if let Some(ref api_root) = self.api_root {
            config.github.api_root = api_root.clone();
        }

        config
            .validate()
            .map_err(|message| GhTokenError::Config(ConfigError::ValidationError { message }))?;

        Ok(config)
    }
}

/// Load the configuration file and apply command line overrides
pub fn resolve_config(overrides: &Overrides) -> Result<Config, GhTokenError> {
    overrides.apply(toml_config::load_config()?)
}

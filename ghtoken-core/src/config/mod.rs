//! Configuration module
//!
//! Handles loading and saving ghtoken configuration from TOML files.

use crate::types::DEFAULT_API_ROOT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod toml_config;

/// Default application label stored in the token's `note`
pub const DEFAULT_NOTE: &str = "ghtoken";

/// Default cache file name, placed in the user's home directory
pub const DEFAULT_TOKEN_FILE: &str = ".github-token.json";

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_note() -> String {
    DEFAULT_NOTE.to_string()
}

fn default_scopes() -> Vec<String> {
    vec!["repo".to_string()]
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API settings
    #[serde(default)]
    pub github: GithubConfig,

    /// What token to request and where to cache it
    #[serde(default)]
    pub token: TokenConfig,
}

impl Config {
    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.github.validate()?;
        self.token.validate()
    }
}

/// `[github]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubConfig {
    /// REST API root, `https://api.github.com` unless using GitHub Enterprise
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl GithubConfig {
    pub fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.api_root)
            .map_err(|e| format!("Invalid API root URL: {}", e))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err("API root must use http or https".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be zero".to_string());
        }

        Ok(())
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            timeout: default_timeout(),
        }
    }
}

/// `[token]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Cache file; `$HOME/.github-token.json` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Application label sent as the authorization note
    #[serde(default = "default_note")]
    pub note: String,

    /// Scopes requested for new tokens
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
}

impl TokenConfig {
    pub fn validate(&self) -> Result<(), String> {
        // An empty note would match any cached record without a label
        if self.note.trim().is_empty() {
            return Err("Note cannot be empty".to_string());
        }

        if let Some(ref path) = self.path {
            if path.as_os_str().is_empty() {
                return Err("Token path cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            path: None,
            note: default_note(),
            scopes: default_scopes(),
        }
    }
}

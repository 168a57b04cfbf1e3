//! Error types for the ghtoken CLI tool
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ghtoken application
#[derive(Error, Debug)]
pub enum GhTokenError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while talking to the authorizations API
    #[error("Authorization error: {0}")]
    Exchange(#[from] ExchangeError),

    /// Errors related to the on-disk token cache
    #[error("Token cache error: {0}")]
    Cache(#[from] CacheError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors rendering a token for output
    #[error("Failed to format token: {0}")]
    Format(#[source] serde_json::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to parse configuration file: {message}")]
    Parse { message: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// Failures of a single authorization exchange
///
/// `Unauthorized { otp_required: true }` is the only variant the exchange
/// recovers from, by asking for a one-time password and trying once more.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("401 Unauthorized{}", otp_hint(.otp_required))]
    Unauthorized { otp_required: bool },

    #[error("can't get access token with request [{payload}]: {status}")]
    RequestFailed { payload: String, status: String },

    #[error("request to the authorizations API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode authorization response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode authorization request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("HTTP client creation failed: {0}")]
    Client(String),
}

impl ExchangeError {
    /// True when the server asked for a one-time password
    pub fn is_otp_challenge(&self) -> bool {
        matches!(self, ExchangeError::Unauthorized { otp_required: true })
    }
}

fn otp_hint(otp_required: &bool) -> &'static str {
    if *otp_required {
        ", please provide one-time password"
    } else {
        ""
    }
}

/// Token cache read/write errors
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("No cached token at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to access token file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Token file {} is not a valid token record: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize token: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GhTokenError>;

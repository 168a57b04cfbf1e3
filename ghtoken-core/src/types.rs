//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use secrecy::{ExposeSecret, Secret};

/// Account password entered for a single authorization exchange
///
/// Never persisted and never logged; dropped once the exchange completes.
#[derive(Clone, Debug)]
pub struct Password(Secret<String>);

impl Password {
    pub fn new(password: String) -> Self {
        Self(Secret::new(password))
    }

    /// Expose the password value (use with caution!)
    ///
    /// Only the HTTP Basic credentials of the outgoing request need it.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self::new(password)
    }
}

/// One-time password answering a two-factor challenge
#[derive(Clone, Debug)]
pub struct OneTimePassword(Secret<String>);

impl OneTimePassword {
    pub fn new(code: String) -> Self {
        Self(Secret::new(code))
    }

    /// Expose the code (use with caution!)
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for OneTimePassword {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

/// Username and password pair used for HTTP Basic authentication
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: Password,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<Password>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Header GitHub uses both to request and to receive one-time passwords
pub const OTP_HEADER: &str = "X-GitHub-OTP";

/// Prefix of the `X-GitHub-OTP` response header when a code is required
pub const OTP_REQUIRED_PREFIX: &str = "required;";

/// Default GitHub REST API root
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

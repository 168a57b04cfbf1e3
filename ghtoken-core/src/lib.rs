//! Core library for the ghtoken CLI tool
//!
//! This crate acquires GitHub personal access tokens through the
//! authorizations API, answering two-factor challenges, and caches them
//! on disk so later runs can skip authentication.

pub mod error;
pub mod types;

pub mod auth;
pub mod config;
pub mod token;

pub use auth::{AuthorizationClient, CredentialSource, TerminalPrompt};
pub use token::ensure::ensure_token;
pub use token::{App, Token, TokenRequest};

/// Initialize logging infrastructure
///
/// Sets up tracing with systemd journal logging when running under systemd.
/// Otherwise logs to stderr, leaving stdout for command output. `RUST_LOG`
/// overrides `default_level`.
pub fn init_logging(default_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    // Try to use systemd journal logging if available
    #[cfg(target_os = "linux")]
    {
        if std::env::var("JOURNAL_STREAM").is_ok() {
            // We're running under systemd, use journal logging
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(filter)
                .init();
            return Ok(());
        }
    }

    // Fallback to stderr logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

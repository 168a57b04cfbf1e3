//! Authentication module
//!
//! Handles interactive credential entry and the authorization exchange,
//! including the one-time password retry.

pub mod exchange;
pub mod prompt;

pub use exchange::AuthorizationClient;
pub use prompt::{CredentialSource, TerminalPrompt};

//! Credential entry
//!
//! The exchange never reads the terminal directly. It asks a
//! [`CredentialSource`] for each field, so tests can script the answers.

use std::io::{self, BufRead, Write};

/// Supplier of interactively entered credentials
pub trait CredentialSource {
    /// Ask for a line of visible text, e.g. a username or one-time password
    fn ask(&mut self, field: &str) -> String;

    /// Ask for a line of hidden text; empty string when reading fails
    fn ask_hidden(&mut self, field: &str) -> String;

    /// Tell the user why credentials are being requested
    fn announce(&mut self, _message: &str) {}
}

/// Reads credentials from the controlling terminal
///
/// Prompts go to stderr so stdout stays clean for the token output.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialSource for TerminalPrompt {
    fn ask(&mut self, field: &str) -> String {
        eprint!("Enter {}: ", field);
        let _ = io::stderr().flush();

        // On a read error return whatever was read so far
        let mut input = String::new();
        let _ = io::stdin().lock().read_line(&mut input);

        input.trim().to_string()
    }

    fn ask_hidden(&mut self, field: &str) -> String {
        rpassword::prompt_password(format!("Enter {}: ", field)).unwrap_or_default()
    }

    fn announce(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

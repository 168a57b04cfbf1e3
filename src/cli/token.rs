//! Token command implementations
//!
//! `ensure`, `new` and `show` all print the resulting token record as JSON
//! on stdout. Prompts and logs go to stderr.

use crate::cli::{resolve_config, Overrides};
use ghtoken_core::config::toml_config::resolve_token_path;
use ghtoken_core::error::GhTokenError;
use ghtoken_core::token::cache::load_token;
use ghtoken_core::{ensure_token, AuthorizationClient, TerminalPrompt, Token, TokenRequest};

/// Run the ensure command
///
/// Reuses the cached token when its note matches, otherwise asks for
/// credentials, creates a new token and caches it.
pub async fn run_ensure(overrides: &Overrides) -> Result<(), GhTokenError> {
    let config = resolve_config(overrides)?;
    let path = resolve_token_path(&config.token)?;
    let client = AuthorizationClient::new(&config.github)?;

    let mut prompt = TerminalPrompt::new();
    let token = ensure_token(
        &client,
        &mut prompt,
        &path,
        &config.token.note,
        &config.token.scopes,
    )
    .await?;

    print_token(&token)
}

/// Run the new command
///
/// Always creates a new token; the cache is neither read nor written.
pub async fn run_new(overrides: &Overrides) -> Result<(), GhTokenError> {
    let config = resolve_config(overrides)?;
    let client = AuthorizationClient::new(&config.github)?;

    let request = TokenRequest::new(config.token.note.clone(), config.token.scopes.clone());
    let token = client.acquire(&request, &mut TerminalPrompt::new()).await?;

    print_token(&token)
}

/// Run the show command
pub fn run_show(overrides: &Overrides) -> Result<(), GhTokenError> {
    let config = resolve_config(overrides)?;
    let path = resolve_token_path(&config.token)?;

    let token = load_token(&path)?;
    print_token(&token)
}

fn print_token(token: &Token) -> Result<(), GhTokenError> {
    let json = serde_json::to_string_pretty(token).map_err(GhTokenError::Format)?;
    println!("{}", json);
    Ok(())
}

//! Reuse a cached token or acquire and persist a new one

use crate::auth::{AuthorizationClient, CredentialSource};
use crate::error::GhTokenError;
use crate::token::cache::{load_token, save_token};
use crate::token::{Token, TokenRequest};
use std::path::Path;
use tracing::{debug, info};

/// Return a token labelled `note`, from the cache at `path` when possible
///
/// A cached record is reused only when its `note` equals `note` exactly;
/// scopes are not compared. A missing, unreadable or corrupt cache file is
/// treated as a miss. A freshly acquired token is written back to `path`,
/// and failing to write it fails the whole call.
#[tracing::instrument(skip(client, source, path, scopes), fields(path = %path.display()))]
pub async fn ensure_token(
    client: &AuthorizationClient,
    source: &mut dyn CredentialSource,
    path: &Path,
    note: &str,
    scopes: &[String],
) -> Result<Token, GhTokenError> {
    match load_token(path) {
        Ok(token) if token.note == note => {
            info!("Reusing cached token");
            return Ok(token);
        }
        Ok(token) => {
            debug!(cached_note = %token.note, "Cached token has a different note, acquiring a new one");
        }
        Err(e) => {
            debug!(error = %e, "No usable cached token, acquiring a new one");
        }
    }

    let request = TokenRequest::new(note, scopes.to_vec());
    let token = client.acquire(&request, source).await?;

    save_token(&token, path)?;
    info!("Stored new token");

    Ok(token)
}

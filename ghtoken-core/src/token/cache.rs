//! On-disk token cache
//!
//! A cache location holds the JSON serialization of exactly one [`Token`].
//! Nothing here checks freshness; reuse decisions belong to
//! [`ensure_token`](crate::token::ensure::ensure_token).

use crate::error::CacheError;
use crate::token::Token;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Load the token stored at `path`
///
/// # Errors
///
/// - `CacheError::NotFound` if there is no file at `path`
/// - `CacheError::Io` if the file exists but cannot be read
/// - `CacheError::Decode` if the content is not a token record
pub fn load_token<P: AsRef<Path>>(path: P) -> Result<Token, CacheError> {
    let path = path.as_ref();

    let contents = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CacheError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CacheError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let token: Token = serde_json::from_slice(&contents).map_err(|e| CacheError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), note = %token.note, "Loaded cached token");
    Ok(token)
}

/// Persist `token` to `path`, replacing any previous record
///
/// The record is written to a temporary file next to `path` and renamed into
/// place, so readers see either the old or the new record. On Unix the file
/// is readable by the owner only.
pub fn save_token<P: AsRef<Path>>(token: &Token, path: P) -> Result<(), CacheError> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| CacheError::Io {
        path: path.to_path_buf(),
        source,
    };

    let contents = serde_json::to_vec(token).map_err(CacheError::Encode)?;

    // Ensure the cache directory exists
    let dir = parent_dir(path);
    std::fs::create_dir_all(&dir).map_err(io_error)?;

    let mut file = NamedTempFile::new_in(&dir).map_err(io_error)?;
    file.write_all(&contents).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|e| io_error(e.error))?;

    debug!(path = %path.display(), note = %token.note, "Saved token");
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

//! GitHub authorization records
//!
//! Models for the create-authorization endpoint, see
//! <https://developer.github.com/v3/oauth_authorizations/#create-a-new-authorization>.
//! The same [`Token`] shape is used for the API response and the cache file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub mod cache;
pub mod ensure;

/// Request body for creating a new personal access token
///
/// Scopes are passed through untouched, GitHub owns their vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub note: String,

    #[serde(skip_serializing_if = "is_unset")]
    pub note_url: Option<String>,

    #[serde(skip_serializing_if = "is_unset")]
    pub client_id: Option<String>,

    #[serde(skip_serializing_if = "is_unset")]
    pub client_secret: Option<String>,

    #[serde(skip_serializing_if = "is_unset")]
    pub fingerprint: Option<String>,
}

impl TokenRequest {
    /// Personal access token request labelled with `note`
    pub fn new(note: impl Into<String>, scopes: Vec<String>) -> Self {
        Self {
            scopes,
            note: note.into(),
            ..Self::default()
        }
    }
}

/// An authorization as returned by GitHub and as stored on disk
///
/// Only `token` matters for using the credential. `note` decides whether a
/// cached record may be reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: u64,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub scopes: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub token: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub token_last_eight: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub hashed_token: String,

    #[serde(deserialize_with = "null_as_default")]
    pub app: App,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub note: String,

    #[serde(skip_serializing_if = "is_unset")]
    pub note_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "is_unset")]
    pub fingerprint: Option<String>,
}

/// OAuth application the authorization belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    pub url: String,
    pub name: String,
    pub client_id: String,
}

fn is_zero(id: &u64) -> bool {
    *id == 0
}

// Empty strings are omitted just like absent ones.
fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

// GitHub sends `null` for unset strings such as `note`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! Shared helpers for integration tests

#![allow(dead_code)]

use ghtoken_core::config::GithubConfig;
use ghtoken_core::{AuthorizationClient, CredentialSource};

/// Credential source answering from fixed strings and recording each prompt
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub username: String,
    pub password: String,
    pub otp: String,
    pub asked: Vec<String>,
    pub announcements: usize,
}

impl ScriptedPrompt {
    pub fn new(username: &str, password: &str, otp: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            otp: otp.to_string(),
            ..Self::default()
        }
    }
}

impl CredentialSource for ScriptedPrompt {
    fn ask(&mut self, field: &str) -> String {
        self.asked.push(field.to_string());
        match field {
            "username" => self.username.clone(),
            "one-time password" => self.otp.clone(),
            _ => String::new(),
        }
    }

    fn ask_hidden(&mut self, field: &str) -> String {
        self.asked.push(field.to_string());
        match field {
            "password" => self.password.clone(),
            _ => String::new(),
        }
    }

    fn announce(&mut self, _message: &str) {
        self.announcements += 1;
    }
}

/// Authorization client pointed at a mock server
pub fn client_for(api_root: &str) -> AuthorizationClient {
    let config = GithubConfig {
        api_root: api_root.to_string(),
        timeout: 5,
    };
    AuthorizationClient::new(&config).expect("client")
}

/// Body GitHub returns for a freshly created authorization
pub fn created_token_json(token: &str, note: &str, scopes: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "url": "https://api.github.com/authorizations/1",
        "scopes": scopes,
        "token": token,
        "token_last_eight": "12345678",
        "hashed_token": "25f94a2a5c7fbaf499c665bc73d67c1c87e496da8985131633ee0a95819db2e8",
        "app": {
            "url": "https://developer.github.com/v3/oauth_authorizations/",
            "name": "GitHub API",
            "client_id": "00000000000000000000"
        },
        "note": note,
        "note_url": null,
        "updated_at": "2011-09-06T20:39:23Z",
        "created_at": "2011-09-06T17:26:27Z",
        "fingerprint": null
    })
}

//! Authorization exchange with the GitHub API
//!
//! Creates a personal access token by POSTing to `/authorizations` with
//! HTTP Basic credentials. A 401 carrying `X-GitHub-OTP: required; ...`
//! is answered once with a one-time password; every other failure is final.

use crate::auth::prompt::CredentialSource;
use crate::config::GithubConfig;
use crate::error::ExchangeError;
use crate::token::{Token, TokenRequest};
use crate::types::{Credentials, OneTimePassword, Password, OTP_HEADER, OTP_REQUIRED_PREFIX};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("ghtoken/", env!("CARGO_PKG_VERSION"));

const CREDENTIALS_NOTICE: &str = "Provide your github credentials. \
    They will be used to retrieve the token and won't be stored.";

/// Client for the create-authorization endpoint
///
/// Owns its HTTP client so tests can point it at a local mock server
/// through [`GithubConfig::api_root`].
#[derive(Debug, Clone)]
pub struct AuthorizationClient {
    client: Client,
    endpoint: Url,
}

impl AuthorizationClient {
    /// Build a client from the `[github]` configuration section
    ///
    /// # Errors
    ///
    /// Returns `ExchangeError::Client` if the API root is not a valid URL or
    /// the HTTP client cannot be created.
    #[tracing::instrument(skip(config), fields(api_root = %config.api_root, timeout_secs = config.timeout))]
    pub fn new(config: &GithubConfig) -> Result<Self, ExchangeError> {
        let endpoint = authorizations_endpoint(&config.api_root)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(USER_AGENT)
            .use_rustls_tls()
            .build()
            .map_err(|e| ExchangeError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    /// Full URL of the authorizations endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Interactively acquire a new token
    ///
    /// Asks `source` for username and password, then tries to create the
    /// authorization. If GitHub demands a one-time password the user is asked
    /// for one and the request is repeated exactly once.
    pub async fn acquire(
        &self,
        request: &TokenRequest,
        source: &mut dyn CredentialSource,
    ) -> Result<Token, ExchangeError> {
        source.announce(CREDENTIALS_NOTICE);

        let username = source.ask("username");
        let password = Password::new(source.ask_hidden("password"));
        let credentials = Credentials { username, password };

        match self.create_authorization(request, &credentials, None).await {
            Err(e) if e.is_otp_challenge() => {
                info!("Two-factor authentication required, retrying with one-time password");
                let otp = OneTimePassword::new(source.ask("one-time password"));
                self.create_authorization(request, &credentials, Some(&otp))
                    .await
            }
            result => result,
        }
    }

    /// Perform a single create-authorization request
    ///
    /// # Errors
    ///
    /// - `Unauthorized` on 401, with `otp_required` set when the response
    ///   carries an `X-GitHub-OTP: required; ...` header
    /// - `RequestFailed` on any other status >= 400
    /// - `Transport` when the request cannot be sent or the body not read
    /// - `Decode` when a successful response is not a token record
    #[tracing::instrument(
        skip_all,
        fields(endpoint = %self.endpoint, note = %request.note, with_otp = otp.is_some())
    )]
    pub async fn create_authorization(
        &self,
        request: &TokenRequest,
        credentials: &Credentials,
        otp: Option<&OneTimePassword>,
    ) -> Result<Token, ExchangeError> {
        let payload = serde_json::to_string(request).map_err(ExchangeError::Encode)?;

        let mut builder = self
            .client
            .post(self.endpoint.clone())
            .basic_auth(&credentials.username, Some(credentials.password.expose()))
            .header(CONTENT_TYPE, "application/json")
            .body(payload.clone());
        if let Some(otp) = otp.filter(|otp| !otp.expose().is_empty()) {
            builder = builder.header(OTP_HEADER, otp.expose());
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(status = %status, "Authorizations API responded");

        if status == StatusCode::UNAUTHORIZED {
            let otp_required = response
                .headers()
                .get(OTP_HEADER)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with(OTP_REQUIRED_PREFIX));

            warn!(otp_required, "Authorization rejected with 401");
            return Err(ExchangeError::Unauthorized { otp_required });
        }

        if status.as_u16() >= 400 {
            warn!(status = %status, "Authorization request failed");
            return Err(ExchangeError::RequestFailed {
                payload,
                status: status.to_string(),
            });
        }

        let body = response.bytes().await?;
        let token: Token = serde_json::from_slice(&body).map_err(ExchangeError::Decode)?;

        info!(id = token.id, scopes = ?token.scopes, "Created authorization");
        Ok(token)
    }
}

/// Resolve `{api_root}/authorizations`, keeping any path prefix of the root
/// (GitHub Enterprise serves the API under `/api/v3`).
fn authorizations_endpoint(api_root: &str) -> Result<Url, ExchangeError> {
    let mut root = Url::parse(api_root)
        .map_err(|e| ExchangeError::Client(format!("Invalid API root {}: {}", api_root, e)))?;

    match root.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ExchangeError::Client(format!(
                "Only HTTP/HTTPS schemes are supported, got: {}",
                scheme
            )));
        }
    }

    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }

    root.join("authorizations")
        .map_err(|e| ExchangeError::Client(format!("Invalid API root {}: {}", api_root, e)))
}

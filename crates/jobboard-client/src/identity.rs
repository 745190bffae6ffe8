use jobboard_types::Session;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::IdentityError;

pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://securetoken.googleapis.com/v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_identity_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_token_endpoint")]
    pub token_endpoint: String,
}

fn default_identity_endpoint() -> String {
    DEFAULT_IDENTITY_ENDPOINT.into()
}

fn default_token_endpoint() -> String {
    DEFAULT_TOKEN_ENDPOINT.into()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_identity_endpoint(),
            token_endpoint: default_token_endpoint(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordSignIn<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordSignInResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
    user_id: String,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

/// REST client for the identity provider (Firebase Authentication).
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    config: IdentityConfig,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Email/password sign-in. `now_ms` anchors the session expiry.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        now_ms: u64,
    ) -> Result<Session, IdentityError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(IdentityError::MissingCredentials);
        }

        let url = format!(
            "{}/accounts:signInWithPassword",
            self.config.endpoint.trim_end_matches('/')
        );
        debug!("signing in {email}");

        let response = self
            .http
            .post(url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&PasswordSignIn {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        let body: PasswordSignInResponse = decode(response).await?;
        Ok(Session {
            uid: body.local_id,
            email: body.email.or_else(|| Some(email.to_string())),
            display_name: body.display_name.filter(|n| !n.is_empty()),
            id_token: body.id_token,
            refresh_token: body.refresh_token,
            expires_at_ms: expiry(now_ms, &body.expires_in)?,
        })
    }

    /// Exchanges the session's refresh token for a fresh ID token.
    pub async fn refresh(&self, session: &Session, now_ms: u64) -> Result<Session, IdentityError> {
        let url = format!("{}/token", self.config.token_endpoint.trim_end_matches('/'));
        debug!("refreshing id token for {}", session.uid);

        let response = self
            .http
            .post(url)
            .query(&[("key", self.config.api_key.as_str())])
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", session.refresh_token.as_str()),
            ])
            .send()
            .await?;

        let body: RefreshResponse = decode(response).await?;
        Ok(Session {
            uid: body.user_id,
            email: session.email.clone(),
            display_name: session.display_name.clone(),
            id_token: body.id_token,
            refresh_token: body.refresh_token,
            expires_at_ms: expiry(now_ms, &body.expires_in)?,
        })
    }
}

async fn decode<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, IdentityError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(match serde_json::from_str::<ProviderErrorBody>(&text) {
            Ok(body) => {
                warn!("identity provider returned {status}: {}", body.error.message);
                IdentityError::from_provider_message(&body.error.message)
            }
            Err(_) => IdentityError::Rejected(format!("status {}", status.as_u16())),
        });
    }

    serde_json::from_str(&text).map_err(|e| IdentityError::Decode(e.to_string()))
}

fn expiry(now_ms: u64, expiresIn: &str) -> Result<u64, IdentityError> {
    let seconds = expiresIn
        .trim()
        .parse::<u64>()
        .map_err(|e| IdentityError::Decode(format!("expiresIn {expiresIn:?}: {e}")))?;
    Ok(now_ms.saturating_add(seconds.saturating_mul(1000)))
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

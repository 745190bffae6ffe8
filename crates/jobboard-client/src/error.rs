use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("email and password are required")]
    MissingCredentials,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("this account has been disabled")]
    UserDisabled,
    #[error("too many sign-in attempts, try again later")]
    TooManyAttempts,
    #[error("session expired, please sign in again")]
    SessionExpired,
    #[error("identity provider rejected the request: {0}")]
    Rejected(String),
    #[error("identity provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected identity provider response: {0}")]
    Decode(String),
}

impl IdentityError {
    /// Maps a provider error message (`CODE` or `CODE : detail`) to a variant.
    pub fn from_provider_message(message: &str) -> Self {
        let code = message.split(" : ").next().unwrap_or(message).trim();
        match code {
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS"
            | "INVALID_EMAIL" => Self::InvalidCredentials,
            "USER_DISABLED" => Self::UserDisabled,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::TooManyAttempts,
            "TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" | "USER_NOT_FOUND" => Self::SessionExpired,
            other => Self::Rejected(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("authentication failed, please sign in again")]
    Unauthorized,
    #[error("failed to load postings (status: {0})")]
    Status(u16),
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed postings response: {0}")]
    Decode(#[from] serde_json::Error),
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use jobboard_client::IdentityError;
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// JSON error body with the status derived from the failure kind.
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        let status = match &err {
            IdentityError::MissingCredentials | IdentityError::Rejected(_) => {
                StatusCode::BAD_REQUEST
            }
            IdentityError::InvalidCredentials | IdentityError::SessionExpired => {
                StatusCode::UNAUTHORIZED
            }
            IdentityError::UserDisabled => StatusCode::FORBIDDEN,
            IdentityError::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            IdentityError::Transport(_) | IdentityError::Decode(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

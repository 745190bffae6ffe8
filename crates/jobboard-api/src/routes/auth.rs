use axum::{extract::State, routing::post, Json, Router};
use jobboard_types::Session;
use serde::Deserialize;

use crate::{error::ApiError, now_ms, state::AppState};

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/login", post(handle_login))
        .route("/api/v1/auth/refresh", post(handle_refresh))
}

async fn handle_login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Session>, ApiError> {
    match state.identity.sign_in(&body.email, &body.password, now_ms()).await {
        Ok(session) => {
            tracing::info!("signed in uid={}", session.uid);
            Ok(Json(session))
        }
        Err(e) => {
            tracing::warn!("sign-in failed for {}: {e}", body.email.trim());
            Err(e.into())
        }
    }
}

async fn handle_refresh(
    State(state): State<AppState>,
    Json(session): Json<Session>,
) -> Result<Json<Session>, ApiError> {
    let refreshed = state.identity.refresh(&session, now_ms()).await.map_err(|e| {
        tracing::warn!("token refresh failed for uid={}: {e}", session.uid);
        ApiError::from(e)
    })?;
    Ok(Json(refreshed))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

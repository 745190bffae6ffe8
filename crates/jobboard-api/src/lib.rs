#![allow(non_snake_case)]

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

pub use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    routes::api_routes(state.clone()).with_state(state)
}

/// Wall-clock time in unix epoch milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

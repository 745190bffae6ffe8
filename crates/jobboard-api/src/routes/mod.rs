pub mod auth;
pub mod meta;

use axum::Router;

use crate::state::AppState;

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(meta::routes(state.clone()))
        .merge(auth::routes(state))
}

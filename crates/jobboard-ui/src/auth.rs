//! Session state shared through Leptos context.
//!
//! `AuthProvider` restores the stored session once the app is running in the
//! browser and holds route content back until that restore has finished, so
//! guards never see a half-initialised state.

use jobboard_types::Session;
use leptos::prelude::*;

use crate::session_store;

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    pub fn current_user(&self) -> Option<Session> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Publishes whatever session the browser has stored and ends loading.
    pub fn restore(&self) {
        let user = session_store::load();
        self.state.set(AuthState {
            user,
            loading: false,
        });
    }

    pub fn sign_in(&self, session: Session) {
        session_store::save(&session);
        self.state.set(AuthState {
            user: Some(session),
            loading: false,
        });
    }

    pub fn sign_out(&self) {
        session_store::clear();
        self.state.update(|s| s.user = None);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[server]
pub async fn refresh_session(session: Session) -> Result<Session, ServerFnError> {
    use jobboard_api::{now_ms, AppState};

    let state =
        use_context::<AppState>().ok_or_else(|| ServerFnError::new("app state unavailable"))?;

    state.identity.refresh(&session, now_ms()).await.map_err(|e| {
        tracing::warn!("token refresh failed for uid={}: {e}", session.uid);
        ServerFnError::new(e.to_string())
    })
}

/// Returns a usable ID token, refreshing it first when it is about to expire.
/// A failed refresh ends the session.
#[cfg(feature = "hydrate")]
pub async fn bearer_token(auth: AuthContext) -> Result<String, String> {
    let session = auth
        .state
        .with_untracked(|s| s.user.clone())
        .ok_or_else(|| "not signed in".to_string())?;

    if !session.needs_refresh(session_store::now_ms()) {
        return Ok(session.id_token);
    }

    settle_refresh(auth, refresh_session(session).await)
}

/// Applies a refresh result: a fresh session replaces the stored one, a
/// failure ends the session. Returns the token to send or the error text.
pub fn settle_refresh(
    auth: AuthContext,
    result: Result<Session, ServerFnError>,
) -> Result<String, String> {
    match result {
        Ok(fresh) => {
            let token = fresh.id_token.clone();
            auth.sign_in(fresh);
            Ok(token)
        }
        Err(e) => {
            auth.sign_out();
            Err(crate::server_message(&e))
        }
    }
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);

    // Effects only run in the browser, which is where the session is stored.
    Effect::new(move |_| auth.restore());

    // Children mount once, when loading ends; later auth changes are handled by the routes.
    let loading = Memo::new(move |_| auth.is_loading());

    view! {
        {move || {
            if loading.get() {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Checking session..."
                    </div>
                }
                    .into_any()
            } else {
                children().into_any()
            }
        }}
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

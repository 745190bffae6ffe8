use jobboard_types::Session;
use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};

use crate::auth::use_auth;
use crate::server_message;

#[server]
pub async fn sign_in(email: String, password: String) -> Result<Session, ServerFnError> {
    use jobboard_api::{now_ms, AppState};

    let state =
        use_context::<AppState>().ok_or_else(|| ServerFnError::new("app state unavailable"))?;

    match state.identity.sign_in(&email, &password, now_ms()).await {
        Ok(session) => {
            tracing::info!("signed in uid={}", session.uid);
            Ok(session)
        }
        Err(e) => {
            tracing::warn!("sign-in failed for {}: {e}", email.trim());
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let signInAction = ServerAction::<SignIn>::new();
    let signInValue = signInAction.value();
    let pending = signInAction.pending();

    Effect::new(move |_| {
        if let Some(Ok(session)) = signInValue.get() {
            auth.sign_in(session);
        }
    });

    // Covers both a fresh sign-in and a viewer who was already signed in.
    Effect::new(move |_| {
        if auth.current_user().is_some() {
            navigate(
                "/",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let errorMessage = move || {
        signInValue
            .get()
            .and_then(|result| result.err())
            .map(|e| server_message(&e))
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"J"</div>
                    <h1>"Job Board"</h1>
                    <p>"Sign in to see the latest public-sector postings"</p>
                </div>

                {move || {
                    errorMessage()
                        .map(|message| {
                            view! { <div class="login-error">"Sign-in failed: " {message}</div> }
                        })
                }}

                <ActionForm action=signInAction>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@example.com"
                            autocomplete="username"
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            required
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </ActionForm>
            </div>
        </div>
    }
}

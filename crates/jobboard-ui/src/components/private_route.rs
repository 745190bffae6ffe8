use leptos::prelude::*;
use leptos_router::{components::Redirect, NavigateOptions};

use crate::auth::{use_auth, AuthState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Session restore still running: neither render nor redirect.
    Pending,
    Allow,
    Redirect,
}

pub fn guard(state: &AuthState) -> Guard {
    if state.loading {
        Guard::Pending
    } else if state.user.is_some() {
        Guard::Allow
    } else {
        Guard::Redirect
    }
}

/// Guard redirects replace the current history entry.
pub fn login_redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Renders `children` for signed-in viewers and sends everyone else to `/login`.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| guard(&auth.state()));

    view! {
        {move || match decision.get() {
            Guard::Pending => view! { <div class="loading"><div class="spinner"></div></div> }.into_any(),
            Guard::Allow => children().into_any(),
            Guard::Redirect => view! { <Redirect path="/login" options=login_redirect_options() /> }.into_any(),
        }}
    }
}

#[cfg(test)]
#[path = "private_route_test.rs"]
mod private_route_test;

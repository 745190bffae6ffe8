use jobboard_client::FetchError;
use jobboard_types::{ClientConfig, Posting};
use leptos::prelude::*;

use crate::auth::{use_auth, AuthContext};
use crate::components::notice::{use_notices, NoticeLevel, Notices};

#[server]
pub async fn get_client_config() -> Result<ClientConfig, ServerFnError> {
    use jobboard_api::AppState;

    let state =
        use_context::<AppState>().ok_or_else(|| ServerFnError::new("app state unavailable"))?;
    Ok(state.client_config)
}

/// Token, endpoint, request.
#[cfg(feature = "hydrate")]
async fn load_postings(auth: AuthContext, notices: Notices) -> Result<Vec<Posting>, String> {
    use jobboard_client::PostingsClient;

    let token = crate::auth::bearer_token(auth).await?;
    let config = get_client_config()
        .await
        .map_err(|e| crate::server_message(&e))?;

    let result = PostingsClient::new(config.postings_url).fetch(&token).await;
    settle_fetch(auth, notices, result)
}

/// Turns a fetch result into view state. A 401 from the backend ends the session.
pub fn settle_fetch(
    auth: AuthContext,
    notices: Notices,
    result: Result<Vec<Posting>, FetchError>,
) -> Result<Vec<Posting>, String> {
    match result {
        Ok(postings) => Ok(postings),
        Err(FetchError::Unauthorized) => {
            let message = FetchError::Unauthorized.to_string();
            auth.sign_out();
            notices.push(message.clone(), NoticeLevel::Error);
            Err(message)
        }
        Err(e) => {
            leptos::logging::warn!("postings request failed: {e}");
            Err(e.to_string())
        }
    }
}

fn sign_out(auth: AuthContext, notices: Notices) {
    auth.sign_out();
    notices.push("Signed out.", NoticeLevel::Info);
}

#[component]
pub fn PostingsPage() -> impl IntoView {
    let auth = use_auth();
    let notices = use_notices();
    #[allow(unused_variables)]
    let (postings, setPostings) = signal(Option::<Result<Vec<Posting>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = load_postings(auth, notices).await;
            setPostings.set(Some(result));
        });
    }

    view! {
        {move || {
            match postings.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading postings..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <button class="btn btn-ghost" on:click=move |_| sign_out(auth, notices)>
                                "Sign Out"
                            </button>
                            <p class="login-error">"Error: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) => {
                    let welcome = auth
                        .current_user()
                        .map(|session| format!("Welcome, {}", session.label()))
                        .unwrap_or_default();
                    view! {
                        <div class="dashboard-header">
                            <h1>"Job Postings"</h1>
                            <div class="header-actions">
                                <span class="subtitle">{welcome}</span>
                                <button class="btn btn-ghost" on:click=move |_| sign_out(auth, notices)>
                                    "Sign Out"
                                </button>
                            </div>
                        </div>
                        <PostingList postings=list />
                    }
                        .into_any()
                }
            }
        }}
    }
}

#[component]
fn PostingList(postings: Vec<Posting>) -> impl IntoView {
    if postings.is_empty() {
        return view! {
            <div class="card">
                <p>"No postings have been collected yet."</p>
            </div>
        }
            .into_any();
    }

    view! {
        <ul class="posting-list">
            <For each=move || postings.clone() key=Posting::key let:posting>
                <PostingItem posting=posting />
            </For>
        </ul>
    }
        .into_any()
}

#[component]
fn PostingItem(posting: Posting) -> impl IntoView {
    let period = posting.period();

    view! {
        <li class="posting card">
            <div class="posting-title">
                <strong>{posting.title.clone()}</strong>
                " - "
                {posting.company_name.clone()}
            </div>
            <div class="posting-meta">
                {posting.job_type.clone().map(|jobType| view! { <span class="badge">{jobType}</span> })}
                {period.map(|p| view! { <span class="posting-period">{p}</span> })}
                {posting
                    .link
                    .clone()
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer">
                                "View posting"
                            </a>
                        }
                    })}
            </div>
        </li>
    }
}

#[cfg(test)]
#[path = "postings_test.rs"]
mod postings_test;

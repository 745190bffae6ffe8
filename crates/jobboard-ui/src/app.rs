use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::auth::AuthProvider;
use crate::components::notice::NoticeProvider;
use crate::components::private_route::PrivateRoute;
use crate::pages::login::LoginPage;
use crate::pages::postings::PostingsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/jobboard-console.css" />
        <Title text="Job Board" />
        <NoticeProvider>
            <AuthProvider>
                <Router>
                    <main class="main-content">
                        <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                            <Route path=StaticSegment("login") view=LoginPage />
                            <Route path=StaticSegment("") view=PostingsView />
                        </Routes>
                    </main>
                </Router>
            </AuthProvider>
        </NoticeProvider>
    }
}

#[component]
fn PostingsView() -> impl IntoView {
    view! {
        <PrivateRoute>
            <PostingsPage />
        </PrivateRoute>
    }
}

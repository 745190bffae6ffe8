#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use jobboard_api::AppState;
    use jobboard_client::IdentityClient;
    use jobboard_types::ClientConfig;
    use jobboard_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: bind={} postings={}",
        appConfig.address(),
        appConfig.api.base_url
    );

    let appState = AppState {
        identity: IdentityClient::new(appConfig.identity.clone()),
        client_config: ClientConfig::from_base_url(&appConfig.api.base_url),
    };

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;
    let addr = appConfig.address();

    let routes = generate_route_list(App);
    let apiRouter = jobboard_api::api_router(appState.clone());

    // Server functions read AppState from context; the JSON API carries it as axum state.
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let appState = appState.clone();
                move || provide_context(appState.clone())
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}

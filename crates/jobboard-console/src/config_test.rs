use jobboard_client::identity::{DEFAULT_IDENTITY_ENDPOINT, DEFAULT_TOKEN_ENDPOINT};

use super::*;

#[test]
fn full_file_parses() {
    let config = parse(
        r#"
        [server]
        bind = "127.0.0.1"
        port = 8080

        [identity]
        api_key = "abc"
        endpoint = "http://localhost:9099/identitytoolkit.googleapis.com/v1"
        token_endpoint = "http://localhost:9099/securetoken.googleapis.com/v1"

        [api]
        base_url = "http://13.209.41.121:8000"
        "#,
    )
    .unwrap();

    assert_eq!(config.address(), "127.0.0.1:8080");
    assert_eq!(config.identity.api_key, "abc");
    assert_eq!(
        config.identity.endpoint,
        "http://localhost:9099/identitytoolkit.googleapis.com/v1"
    );
    assert_eq!(config.api.base_url, "http://13.209.41.121:8000");
}

#[test]
fn missing_sections_use_defaults() {
    let config = parse("[identity]\napi_key = \"abc\"\n").unwrap();
    assert_eq!(config.address(), "0.0.0.0:3000");
    assert_eq!(config.identity.endpoint, DEFAULT_IDENTITY_ENDPOINT);
    assert_eq!(config.identity.token_endpoint, DEFAULT_TOKEN_ENDPOINT);
    assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
}

#[test]
fn invalid_file_is_an_error() {
    assert!(parse("[server]\nport = \"eighty\"\n").is_err());
}

#[test]
fn unreadable_path_falls_back_to_defaults() {
    let config = load("/nonexistent/jobboard.toml");
    assert_eq!(config.server.port, 3000);
}

#[test]
fn env_overrides_api_key() {
    let mut config = Config::default();
    config.apply_env(|name| (name == API_KEY_ENV).then(|| " from-env ".to_string()));
    assert_eq!(config.identity.api_key, "from-env");
}

#[test]
fn blank_env_keeps_file_value() {
    let mut config = parse("[identity]\napi_key = \"from-file\"\n").unwrap();
    config.apply_env(|_| Some("   ".to_string()));
    assert_eq!(config.identity.api_key, "from-file");
}

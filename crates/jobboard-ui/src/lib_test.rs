use leptos::prelude::ServerFnError;

use super::*;

#[test]
fn server_message_strips_prefix() {
    let err: ServerFnError = ServerFnError::new("invalid email or password");
    assert_eq!(server_message(&err), "invalid email or password");
}

#[test]
fn server_message_keeps_transport_errors() {
    let err: ServerFnError = ServerFnError::Request("connection refused".into());
    assert!(server_message(&err).contains("connection refused"));
}

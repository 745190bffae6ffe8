#![allow(non_snake_case)]

pub mod app;
pub mod auth;
pub mod components;
pub mod pages;
pub mod session_store;

pub use app::{shell, App};

use leptos::prelude::ServerFnError;

/// User-facing text of a server function failure, without the transport prefix.
pub fn server_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

//! Browser persistence for the signed-in session.
//!
//! The session lives in `localStorage` so a reload keeps the user signed in.
//! Outside the browser every operation is a no-op.

use jobboard_types::Session;

pub const STORAGE_KEY: &str = "jobboard.session";

pub fn encode(session: &Session) -> Option<String> {
    serde_json::to_string(session).ok()
}

/// Decodes a stored value; anything unreadable counts as "no session".
pub fn decode(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        let session = decode(&raw);
        if session.is_none() {
            leptos::logging::warn!("discarding unreadable stored session");
            let _ = storage.remove_item(STORAGE_KEY);
        }
        session
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let (Some(storage), Some(raw)) = (storage(), encode(session)) else {
            return;
        };
        if storage.set_item(STORAGE_KEY, &raw).is_err() {
            leptos::logging::warn!("failed to persist session");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Current time in unix epoch milliseconds, from the browser clock.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

pub mod posting;
pub mod session;

pub use posting::*;
pub use session::*;


use serde::{Deserialize, Serialize};

/// Browser-facing configuration, served by the console so the backend origin
/// is not compiled into the WASM bundle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    pub postings_url: String,
}

impl ClientConfig {
    /// Builds the config from the postings backend origin, e.g. `http://host:8000`.
    pub fn from_base_url(base_url: &str) -> Self {
        Self {
            postings_url: format!("{}/postings", base_url.trim_end_matches('/')),
        }
    }
}

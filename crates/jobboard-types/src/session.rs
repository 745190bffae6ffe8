use serde::{Deserialize, Serialize};

/// ID tokens are refreshed this long before they actually expire.
pub const REFRESH_MARGIN_MS: u64 = 5 * 60 * 1000;

/// A signed-in identity as issued by the identity provider.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    /// Unix epoch milliseconds.
    pub expires_at_ms: u64,
}

impl Session {
    pub fn needs_refresh(&self, now_ms: u64) -> bool {
        now_ms.saturating_add(REFRESH_MARGIN_MS) >= self.expires_at_ms
    }

    /// Name shown in the header: email, then display name, then uid.
    pub fn label(&self) -> &str {
        self.email
            .as_deref()
            .or(self.display_name.as_deref())
            .unwrap_or(&self.uid)
    }
}

use serde::{Deserialize, Serialize};

/// A job listing as returned by the postings backend.
///
/// Only `title` and `company_name` are relied on; everything else is optional
/// so older or trimmed backends still decode.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Posting {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Posting {
    /// List key: the backend id when present, the title otherwise.
    pub fn key(&self) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => self.title.clone(),
        }
    }

    /// Application period, e.g. `2025-03-01 ~ 2025-03-14`.
    pub fn period(&self) -> Option<String> {
        match (self.start_date.as_deref(), self.end_date.as_deref()) {
            (Some(start), Some(end)) => Some(format!("{start} ~ {end}")),
            (Some(start), None) => Some(format!("from {start}")),
            (None, Some(end)) => Some(format!("until {end}")),
            (None, None) => None,
        }
    }
}

use jobboard_types::Posting;
use reqwest::{header, StatusCode};
use tracing::debug;

use crate::error::FetchError;

/// Reads the postings listing with a bearer token.
#[derive(Clone)]
pub struct PostingsClient {
    http: reqwest::Client,
    url: String,
}

impl PostingsClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub async fn fetch(&self, token: &str) -> Result<Vec<Posting>, FetchError> {
        let response = self
            .http
            .get(&self.url)
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!("GET {} -> {status}", self.url);

        if status == StatusCode::UNAUTHORIZED {
            return Err(FetchError::Unauthorized);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
#[path = "postings_test.rs"]
mod postings_test;

use reqwest::Client;
use std::time::Duration;

use crate::services::status::{StatusError, StatusPayload, StatusReport};

pub const DEFAULT_STATUS_URL: &str = "https://status.github.com/api/status.json";

/// GitHub status API client
/// Performs one bounded GET per call and decodes the status payload
pub struct GithubStatusClient {
    client: Client,
    url: String,
}

impl GithubStatusClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, StatusError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("github-status/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current status from the endpoint
    pub async fn fetch(&self) -> Result<StatusReport, StatusError> {
        tracing::debug!("ping status api {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(StatusError::Api(response.status()));
        }

        // Decode from text so a malformed body surfaces as a parse error
        let body = response.text().await?;
        let payload: StatusPayload = serde_json::from_str(&body)?;

        Ok(payload.into())
    }
}

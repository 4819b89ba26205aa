use reqwest::Url;

use crate::services::status::Status;

/// Slack credentials taken from `SLACK_TEAM` / `SLACK_TOKEN`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackCredentials {
    pub team: String,
    pub token: String,
}

/// Fully-built slackbot webhook for one channel
#[derive(Debug, Clone)]
pub struct SlackWebhook {
    url: Url,
}

impl SlackWebhook {
    pub fn new(credentials: &SlackCredentials, channel: &str) -> Result<Self, WebhookError> {
        let base = format!("https://{}.slack.com/services/hooks/slackbot", credentials.team);
        Self::with_base_url(&base, &credentials.token, channel)
    }

    /// Build against an arbitrary slackbot-compatible base URL.
    /// Token and `#channel` are URL-encoded into the query string.
    pub fn with_base_url(base: &str, token: &str, channel: &str) -> Result<Self, WebhookError> {
        let channel = format!("#{}", channel.trim_start_matches('#'));
        let url = Url::parse_with_params(base, &[("token", token), ("channel", channel.as_str())])
            .map_err(|e| WebhookError::InvalidUrl(e.to_string()))?;

        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Human-readable message for a status; `Unknown` has none
pub fn message_for(status: Status) -> Option<&'static str> {
    match status {
        Status::Good => Some("github is now all good :white_check_mark:"),
        Status::Minor => Some("github has minor issue :construction:"),
        Status::Major => Some("github is DOWN!!!! :x:"),
        Status::Unknown => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No channel, or Slack credentials missing
    Disabled,
    /// Status has no message
    NoMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    Skipped(SkipReason),
}

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("Invalid webhook URL: {0}")]
    InvalidUrl(String),
    #[error("Slack returned {0}")]
    Api(reqwest::StatusCode),
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
}

// The request URL carries the Slack token, keep it out of the error text
impl From<reqwest::Error> for WebhookError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

use std::env;

use crate::services::status::DEFAULT_STATUS_URL;
use crate::services::webhook::SlackCredentials;

/// Environment configuration
/// Slack credentials are optional: either one missing disables notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub slack: Option<SlackCredentials>,
    pub status_url: String,
}

impl Environment {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let slack = match (non_empty_var("SLACK_TEAM"), non_empty_var("SLACK_TOKEN")) {
            (Some(team), Some(token)) => Some(SlackCredentials { team, token }),
            _ => None,
        };

        let status_url = non_empty_var("GITHUB_STATUS_URL").unwrap_or_else(|| DEFAULT_STATUS_URL.to_string());

        Self { slack, status_url }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub mod cli;
pub mod duration;
pub mod environment;

pub use cli::Cli;
pub use duration::parse_duration;
pub use environment::Environment;

use std::path::PathBuf;
use std::time::Duration;

use crate::services::monitor::{PollingStrategy, UnknownPolicy};
use crate::services::webhook::{SlackCredentials, SlackWebhook, WebhookError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid duration {0:?} (expected e.g. \"1s\", \"5m\", \"1.5h\")")]
    InvalidDuration(String),
    #[error("duration {0:?} must be greater than zero")]
    NonPositiveDuration(String),
}

/// Runtime configuration, assembled once at startup from flags and environment
#[derive(Debug, Clone)]
pub struct Config {
    pub strategy: PollingStrategy,
    pub unknown_policy: UnknownPolicy,
    pub channel: Option<String>,
    pub slack: Option<SlackCredentials>,
    pub status_url: String,
    pub state_file: PathBuf,
    pub http_timeout: Duration,
    pub verbose: bool,
}

impl Config {
    pub fn new(cli: Cli, env: Environment) -> Self {
        let unknown_policy = if cli.ignore_unknown {
            UnknownPolicy::Ignore
        } else {
            UnknownPolicy::Track
        };

        Self {
            strategy: PollingStrategy::new(cli.low, cli.high),
            unknown_policy,
            channel: cli.channel.filter(|c| !c.trim().is_empty()),
            slack: env.slack,
            status_url: env.status_url,
            state_file: cli.state_file,
            http_timeout: cli.timeout,
            verbose: cli.verbose,
        }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self::new(cli, Environment::from_env())
    }

    /// Default tracing filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "github_status=debug"
        } else {
            "github_status=info"
        }
    }

    /// Slack webhook, when both a channel and credentials are configured
    pub fn slack_webhook(&self) -> Result<Option<SlackWebhook>, WebhookError> {
        match (&self.channel, &self.slack) {
            (Some(channel), Some(credentials)) => SlackWebhook::new(credentials, channel).map(Some),
            _ => Ok(None),
        }
    }
}

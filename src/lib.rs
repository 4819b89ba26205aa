pub mod config;
pub mod services;

use config::Config;
use services::monitor::MonitorEngine;
use services::status::{GithubStatusClient, StatusError};
use services::store::FileStateStore;
use services::webhook::{SlackNotifier, WebhookError};

/// Monitor wired to the real GitHub, file and Slack collaborators
pub type StatusMonitor = MonitorEngine<GithubStatusClient, FileStateStore, SlackNotifier>;

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Failed to build status client: {0}")]
    Status(#[from] StatusError),
    #[error("Failed to build Slack notifier: {0}")]
    Webhook(#[from] WebhookError),
}

pub async fn create_monitor(config: &Config) -> Result<StatusMonitor, MonitorError> {
    let fetcher = GithubStatusClient::new(config.status_url.clone(), config.http_timeout)?;
    let store = FileStateStore::new(config.state_file.clone());

    let webhook = match config.slack_webhook() {
        Ok(Some(webhook)) => Some(webhook),
        Ok(None) => {
            tracing::info!("slack notifications disabled");
            None
        }
        Err(e) => {
            tracing::error!("slack notifications disabled: {}", e);
            None
        }
    };
    let notifier = SlackNotifier::new(webhook, config.http_timeout)?;

    Ok(MonitorEngine::start(fetcher, store, notifier, config.strategy, config.unknown_policy).await)
}

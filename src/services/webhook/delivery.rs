use reqwest::Client;
use std::time::Duration;

use crate::services::status::Status;
use crate::services::webhook::{message_for, NotifyOutcome, SkipReason, SlackWebhook, WebhookError};

/// Slack notification client
/// Sends one plain-text POST per call, no retries
pub struct SlackNotifier {
    client: Client,
    webhook: Option<SlackWebhook>,
}

impl SlackNotifier {
    pub fn new(webhook: Option<SlackWebhook>, timeout: Duration) -> Result<Self, WebhookError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, webhook })
    }

    /// Notifier that never sends anything
    pub fn disabled() -> Self {
        Self {
            client: Client::new(),
            webhook: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.webhook.is_some()
    }

    /// Deliver the message for `status`
    pub async fn notify(&self, status: Status) -> Result<NotifyOutcome, WebhookError> {
        let Some(webhook) = &self.webhook else {
            return Ok(NotifyOutcome::Skipped(SkipReason::Disabled));
        };

        let Some(message) = message_for(status) else {
            return Ok(NotifyOutcome::Skipped(SkipReason::NoMessage));
        };

        let response = self
            .client
            .post(webhook.url().clone())
            .header("Content-Type", "text/plain")
            .body(message)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WebhookError::Api(response.status()));
        }

        Ok(NotifyOutcome::Sent)
    }
}

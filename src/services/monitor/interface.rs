use async_trait::async_trait;

use crate::services::status::{GithubStatusClient, Status, StatusError, StatusReport};
use crate::services::store::{FileStateStore, StoreError};
use crate::services::webhook::{NotifyOutcome, SlackNotifier, WebhookError};

// =============================================================================
// COLLABORATOR TRAITS
// =============================================================================

#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self) -> Result<StatusReport, StatusError>;
}

#[async_trait]
pub trait StateStore: Send + Sync {
    async fn load(&self) -> Result<Option<Status>, StoreError>;
    async fn save(&self, status: Status) -> Result<(), StoreError>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, status: Status) -> Result<NotifyOutcome, WebhookError>;
}

// =============================================================================
// IMPLEMENTATIONS
// =============================================================================

#[async_trait]
impl StatusSource for GithubStatusClient {
    async fn fetch(&self) -> Result<StatusReport, StatusError> {
        GithubStatusClient::fetch(self).await
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn load(&self) -> Result<Option<Status>, StoreError> {
        FileStateStore::load(self).await
    }

    async fn save(&self, status: Status) -> Result<(), StoreError> {
        FileStateStore::save(self, status).await
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify(&self, status: Status) -> Result<NotifyOutcome, WebhookError> {
        SlackNotifier::notify(self, status).await
    }
}

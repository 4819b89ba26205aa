use std::time::Duration;

use crate::services::monitor::interface::{Notifier, StateStore, StatusSource};
use crate::services::monitor::strategy::{PollingStrategy, UnknownPolicy};
use crate::services::status::Status;
use crate::services::webhook::NotifyOutcome;

/// A change of observed status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// `None` when nothing had been recorded yet
    pub from: Option<Status>,
    pub to: Status,
}

/// Result of one polling cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub observed: Status,
    pub transition: Option<Transition>,
    pub next_interval: Duration,
}

/// Status polling engine.
///
/// Owns the last observed status and drives fetch → compare → persist →
/// notify, one cycle per [`tick`](Self::tick). Collaborator failures are
/// logged here and never abort the loop.
pub struct MonitorEngine<F, S, N> {
    fetcher: F,
    store: S,
    notifier: N,
    strategy: PollingStrategy,
    unknown_policy: UnknownPolicy,
    last_observed: Option<Status>,
}

impl<F, S, N> MonitorEngine<F, S, N>
where
    F: StatusSource,
    S: StateStore,
    N: Notifier,
{
    /// Build the engine, seeding the last observed status from the store
    pub async fn start(
        fetcher: F,
        store: S,
        notifier: N,
        strategy: PollingStrategy,
        unknown_policy: UnknownPolicy,
    ) -> Self {
        let last_observed = match store.load().await {
            Ok(Some(status)) => {
                tracing::info!("loaded last status: {}", status);
                Some(status)
            }
            Ok(None) => {
                tracing::info!("no last status recorded");
                None
            }
            Err(e) => {
                tracing::warn!("error reading last status: {}", e);
                None
            }
        };

        Self {
            fetcher,
            store,
            notifier,
            strategy,
            unknown_policy,
            last_observed,
        }
    }

    pub fn last_observed(&self) -> Option<Status> {
        self.last_observed
    }

    pub fn strategy(&self) -> &PollingStrategy {
        &self.strategy
    }

    /// Run one polling cycle
    pub async fn tick(&mut self) -> TickOutcome {
        let observed = match self.fetcher.fetch().await {
            Ok(report) => {
                tracing::debug!(
                    "got status: {} (last updated {:?})",
                    report.status,
                    report.last_updated
                );
                report.status
            }
            Err(e) => {
                tracing::warn!("error fetching status: {}", e);
                Status::Unknown
            }
        };

        let transition = if self.counts_as_observation(observed) && self.last_observed != Some(observed) {
            let transition = Transition {
                from: self.last_observed,
                to: observed,
            };
            self.apply(transition).await;
            Some(transition)
        } else {
            None
        };

        let next_interval = self.strategy.next_interval(observed);
        tracing::debug!("next poll in {:?}", next_interval);

        TickOutcome {
            observed,
            transition,
            next_interval,
        }
    }

    /// Poll forever, sleeping the selected interval between cycles
    pub async fn run(mut self) {
        loop {
            let outcome = self.tick().await;
            tokio::time::sleep(outcome.next_interval).await;
        }
    }

    fn counts_as_observation(&self, status: Status) -> bool {
        !(status == Status::Unknown && self.unknown_policy == UnknownPolicy::Ignore)
    }

    async fn apply(&mut self, transition: Transition) {
        let status = transition.to;

        match transition.from {
            Some(from) => tracing::info!("status changed from {:?} to {:?}", from.as_str(), status.as_str()),
            None => tracing::info!("status changed to {:?}", status.as_str()),
        }

        if let Err(e) = self.store.save(status).await {
            tracing::error!("error saving last status: {}", e);
        }

        match self.notifier.notify(status).await {
            Ok(NotifyOutcome::Sent) => tracing::info!("notification sent for {}", status),
            Ok(NotifyOutcome::Skipped(reason)) => {
                tracing::debug!("notification skipped for {}: {:?}", status, reason)
            }
            Err(e) => tracing::error!("error sending notification: {}", e),
        }

        self.last_observed = Some(status);
    }
}

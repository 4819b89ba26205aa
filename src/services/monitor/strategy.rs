use std::time::Duration;

use crate::services::status::Status;

pub const DEFAULT_LOW_FREQUENCY: Duration = Duration::from_secs(60);
pub const DEFAULT_HIGH_FREQUENCY: Duration = Duration::from_secs(5);

/// Two-speed polling strategy.
///
/// A healthy service is polled at the low frequency; anything else,
/// including a failed observation, switches to the high frequency so
/// recovery is noticed quickly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingStrategy {
    /// Interval used while the status is good
    pub low_frequency: Duration,
    /// Interval used for every other status
    pub high_frequency: Duration,
}

impl PollingStrategy {
    pub fn new(low_frequency: Duration, high_frequency: Duration) -> Self {
        Self {
            low_frequency,
            high_frequency,
        }
    }

    pub fn next_interval(&self, status: Status) -> Duration {
        if status.is_good() {
            self.low_frequency
        } else {
            self.high_frequency
        }
    }
}

impl Default for PollingStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_FREQUENCY, DEFAULT_HIGH_FREQUENCY)
    }
}

/// How an `Unknown` observation takes part in change detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownPolicy {
    /// `Unknown` is compared, persisted and dispatched like any status
    #[default]
    Track,
    /// `Unknown` is not an observation; the recorded state is left alone
    Ignore,
}

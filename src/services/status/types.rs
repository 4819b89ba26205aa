use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Health of the monitored service as reported by the status API.
///
/// `Unknown` is synthetic: it stands for an observation that failed
/// (network error, bad payload, unrecognised status string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Good,
    Minor,
    Major,
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, Self::Good)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognised status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Self::Good),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            "unknown" => Ok(Self::Unknown),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Raw payload returned by the status endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct StatusPayload {
    pub status: String,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// One decoded observation of the remote status
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub status: Status,
    pub last_updated: Option<DateTime<Utc>>,
}

impl From<StatusPayload> for StatusReport {
    fn from(payload: StatusPayload) -> Self {
        let status = payload.status.parse().unwrap_or_else(|e: ParseStatusError| {
            tracing::warn!("{}, treating as unknown", e);
            Status::Unknown
        });

        Self {
            status,
            last_updated: payload.last_updated,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("status API returned {0}")]
    Api(reqwest::StatusCode),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::services::status::{ParseStatusError, Status};

pub const DEFAULT_STATE_FILE: &str = "last";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Corrupt state file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: ParseStatusError,
    },
}

/// Last-known status persisted as a single plain-text file
///
/// The file holds exactly the status string, no trailing newline.
/// Writes go to a sibling temp file which is renamed over the target,
/// so a reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the last-known status. A missing file means no prior state.
    pub async fn load(&self) -> Result<Option<Status>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        trimmed
            .parse()
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })
    }

    /// Overwrite the persisted status
    pub async fn save(&self, status: Status) -> Result<(), StoreError> {
        let tmp = self.tmp_path();

        tokio::fs::write(&tmp, status.as_str())
            .await
            .map_err(|source| StoreError::Io {
                path: tmp.clone(),
                source,
            })?;

        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_STATE_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

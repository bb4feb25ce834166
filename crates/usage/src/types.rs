use std::io;
use std::path::PathBuf;

use focus_core::UsageSnapshot;
use serde::Serialize;

/// Summary returned after folding one OS usage query into the store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RefreshStats {
    pub packages_seen: usize,
    pub records_inserted: usize,
    pub usage_added_ms: i64,
    pub snapshot: UsageSnapshot,
}

/// Errors emitted by snapshot providers and the refresh pipeline.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid usage snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("usage stats unavailable: {0}")]
    Unavailable(String),
    #[error("db error: {0}")]
    Db(#[from] focus_db::DbError),
}

pub type Result<T> = std::result::Result<T, UsageError>;

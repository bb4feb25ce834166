use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::UNIX_EPOCH;

use focus_core::{ForegroundUsage, TimeRange};

use crate::types::{Result, UsageError};

/// Source of raw per-package foreground time, normally the OS usage-stats
/// service. Calls may block; callers bound them with a timeout.
pub trait UsageSnapshotProvider: Send + Sync {
    fn query_usage(&self, window: TimeRange) -> Result<Vec<ForegroundUsage>>;
}

/// Reads a usage export written by the device, a JSON array of
/// `{"packageName": ..., "totalForegroundMillis": ...}` objects.
///
/// The export is already cut to a window on the device. A file last written
/// before `window.start` is stale and reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UsageSnapshotProvider for JsonFileProvider {
    fn query_usage(&self, window: TimeRange) -> Result<Vec<ForegroundUsage>> {
        let io_error = |source: std::io::Error| UsageError::Io {
            path: self.path.clone(),
            source,
        };
        let metadata = fs::metadata(&self.path).map_err(io_error)?;
        let written_at = modified_ms(&metadata).unwrap_or(i64::MAX);
        if written_at < window.start {
            tracing::debug!(
                path = %self.path.display(),
                written_at,
                window_start = window.start,
                "usage export is stale"
            );
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(io_error)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn modified_ms(metadata: &fs::Metadata) -> Option<i64> {
    let modified = metadata.modified().ok()?;
    let since_epoch = modified.duration_since(UNIX_EPOCH).ok()?;
    i64::try_from(since_epoch.as_millis()).ok()
}

/// In-memory provider whose rows can be swapped at runtime.
#[derive(Debug, Default)]
pub struct StaticUsageProvider {
    rows: RwLock<Vec<ForegroundUsage>>,
}

impl StaticUsageProvider {
    pub fn new(rows: Vec<ForegroundUsage>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub fn set_rows(&self, rows: Vec<ForegroundUsage>) {
        match self.rows.write() {
            Ok(mut guard) => *guard = rows,
            Err(poisoned) => *poisoned.into_inner() = rows,
        }
    }
}

impl UsageSnapshotProvider for StaticUsageProvider {
    fn query_usage(&self, _window: TimeRange) -> Result<Vec<ForegroundUsage>> {
        self.rows
            .read()
            .map(|rows| rows.clone())
            .map_err(|_| UsageError::Unavailable("usage rows lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> TimeRange {
        TimeRange { start: 0, end: 1 }
    }

    #[test]
    fn json_provider_reads_export() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("usage.json");
        fs::write(
            &path,
            r#"[{"packageName":"com.xingin.xhs","totalForegroundMillis":900000}]"#,
        )
        .expect("write export");

        let rows = JsonFileProvider::new(&path)
            .query_usage(window())
            .expect("rows");
        assert_eq!(
            rows,
            vec![ForegroundUsage {
                package_name: "com.xingin.xhs".to_string(),
                total_foreground_millis: 900_000,
            }]
        );
    }

    #[test]
    fn json_provider_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = JsonFileProvider::new(dir.path().join("missing.json"))
            .query_usage(window())
            .expect_err("missing");
        assert!(matches!(err, UsageError::Io { .. }));
    }

    #[test]
    fn json_provider_ignores_export_older_than_window() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("usage.json");
        fs::write(
            &path,
            r#"[{"packageName":"tv.danmaku.bili","totalForegroundMillis":60000}]"#,
        )
        .expect("write export");

        let rows = JsonFileProvider::new(&path)
            .query_usage(TimeRange {
                start: i64::MAX - 1,
                end: i64::MAX,
            })
            .expect("rows");
        assert!(rows.is_empty());
    }

    #[test]
    fn static_provider_swaps_rows() {
        let provider = StaticUsageProvider::default();
        assert!(provider.query_usage(window()).expect("rows").is_empty());
        provider.set_rows(vec![ForegroundUsage {
            package_name: "a".to_string(),
            total_foreground_millis: 1,
        }]);
        assert_eq!(provider.query_usage(window()).expect("rows").len(), 1);
    }
}

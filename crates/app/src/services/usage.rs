use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Local;

use crate::error::{AppError, Result};
use crate::services::{SharedConfig, join_error, open_db};
use crate::util::time::now_ms;
use focus_core::{DAY_MS, TimeRange, UsageRecord, UsageSnapshot, UsageStats};
use focus_db::Db;
use focus_usage::{
    RefreshStats, UsageSnapshotProvider, apply_usage_rows, collect_usage, today_range,
    usage_snapshot,
};

#[derive(Clone)]
pub struct UsageService {
    config: SharedConfig,
    provider: Arc<dyn UsageSnapshotProvider>,
}

impl UsageService {
    pub(super) fn new(config: SharedConfig, provider: Arc<dyn UsageSnapshotProvider>) -> Self {
        Self { config, provider }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn save_record(&self, record: &UsageRecord) -> Result<i64> {
        if !record.is_consistent() {
            return Err(AppError::InvalidInput(format!(
                "inconsistent usage record for {}",
                record.app_name
            )));
        }
        let db = self.db()?;
        Ok(db.insert_usage_record(record)?)
    }

    pub fn records(&self, range: &TimeRange) -> Result<Vec<UsageRecord>> {
        let db = self.db()?;
        Ok(db.usage_records_in_range(range)?)
    }

    /// Stored usage since local midnight.
    pub fn today_usage(&self) -> Result<i64> {
        let db = self.db()?;
        Ok(db.total_usage_between(&today_range(&Local::now()))?)
    }

    /// Stored usage since local midnight, keyed by app name.
    pub fn today_usage_by_app(&self) -> Result<BTreeMap<String, i64>> {
        let db = self.db()?;
        Ok(db.usage_by_app_between(&today_range(&Local::now()))?)
    }

    pub fn stats(&self) -> Result<UsageStats> {
        let db = self.db()?;
        let today = today_range(&Local::now());
        let today_usage = db.total_usage_between(&today)?;
        let by_app = db.usage_by_app_between(&today)?;
        Ok(UsageStats::from_today(today_usage, by_app))
    }

    pub fn delete_record(&self, id: i64) -> Result<bool> {
        let db = self.db()?;
        Ok(db.delete_usage_record(id)?)
    }

    /// Removes every record and resets refresh cursors so the next refresh
    /// starts from a clean baseline.
    pub fn clear(&self) -> Result<usize> {
        let db = self.db()?;
        let removed = db.clear_usage_records()?;
        db.clear_usage_cursors()?;
        tracing::info!(removed, "usage records cleared");
        Ok(removed)
    }

    /// Live OS usage for the trailing 24 hours. Provider failures yield an
    /// empty snapshot.
    pub async fn snapshot(&self) -> UsageSnapshot {
        let window = TimeRange::trailing(now_ms(), DAY_MS);
        usage_snapshot(self.provider.clone(), window, self.config.snapshot_timeout).await
    }

    /// Queries today's OS totals and stores the growth since the last refresh.
    pub async fn refresh(&self) -> Result<RefreshStats> {
        let now = Local::now();
        let rows = collect_usage(
            self.provider.clone(),
            today_range(&now),
            self.config.snapshot_timeout,
        )
        .await;
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || -> Result<RefreshStats> {
            let mut db = open_db(&config)?;
            Ok(apply_usage_rows(&mut db, &rows, &now)?)
        })
        .await
        .map_err(join_error)?
    }
}

use std::sync::Arc;
use std::time::Duration;

use focus_core::{ForegroundUsage, TimeRange, UsageSnapshot, aggregate_usage};

use crate::provider::UsageSnapshotProvider;

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Queries the provider on the blocking pool, giving up after `timeout`.
///
/// Never fails: provider errors, panics and timeouts all degrade to an empty
/// row set and are only logged. A timed-out query keeps running on its
/// blocking thread; its result is dropped.
pub async fn collect_usage(
    provider: Arc<dyn UsageSnapshotProvider>,
    window: TimeRange,
    timeout: Duration,
) -> Vec<ForegroundUsage> {
    let query = tokio::task::spawn_blocking(move || provider.query_usage(window));
    match tokio::time::timeout(timeout, query).await {
        Ok(Ok(Ok(rows))) => {
            tracing::debug!(rows = rows.len(), "usage query returned");
            rows
        }
        Ok(Ok(Err(err))) => {
            tracing::warn!(error = %err, "usage query failed; using empty snapshot");
            Vec::new()
        }
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "usage query task aborted; using empty snapshot");
            Vec::new()
        }
        Err(_) => {
            tracing::warn!(
                timeout_ms = timeout.as_millis() as u64,
                "usage query timed out; using empty snapshot"
            );
            Vec::new()
        }
    }
}

/// Aggregated snapshot for `window`, empty when the provider misbehaves.
pub async fn usage_snapshot(
    provider: Arc<dyn UsageSnapshotProvider>,
    window: TimeRange,
    timeout: Duration,
) -> UsageSnapshot {
    let rows = collect_usage(provider, window, timeout).await;
    aggregate_usage(&rows)
}

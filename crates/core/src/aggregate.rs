use std::collections::BTreeMap;

use crate::platform::builtin_package_table;
use crate::{ForegroundUsage, UsageSnapshot};

/// Platform id for an OS package, if the package is one of the tracked platforms.
pub fn platform_for_package(package_name: &str) -> Option<&'static str> {
    builtin_package_table()
        .find(|(_, package)| *package == package_name)
        .map(|(id, _)| id)
}

/// Folds raw per-package rows into an overall total and per-platform totals.
///
/// Every package counts toward `total_usage`; only packages in the platform
/// table show up in `platform_usage`. Rows for the same package are summed and
/// non-positive rows are ignored.
pub fn aggregate_usage(rows: &[ForegroundUsage]) -> UsageSnapshot {
    let mut snapshot = UsageSnapshot::default();
    for row in rows {
        if row.total_foreground_millis <= 0 {
            continue;
        }
        snapshot.total_usage = snapshot
            .total_usage
            .saturating_add(row.total_foreground_millis);
        if let Some(platform) = platform_for_package(&row.package_name) {
            let entry = snapshot
                .platform_usage
                .entry(platform.to_string())
                .or_insert(0);
            *entry = entry.saturating_add(row.total_foreground_millis);
        }
    }
    snapshot
}

/// Sums rows per package, dropping non-positive totals.
pub fn totals_by_package(rows: &[ForegroundUsage]) -> BTreeMap<String, i64> {
    let mut totals = BTreeMap::new();
    for row in rows {
        if row.total_foreground_millis <= 0 {
            continue;
        }
        let entry = totals.entry(row.package_name.clone()).or_insert(0i64);
        *entry = entry.saturating_add(row.total_foreground_millis);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(package: &str, millis: i64) -> ForegroundUsage {
        ForegroundUsage {
            package_name: package.to_string(),
            total_foreground_millis: millis,
        }
    }

    #[test]
    fn untracked_packages_count_toward_total_only() {
        let snapshot = aggregate_usage(&[row("com.xingin.xhs", 900_000), row("com.other.app", 500_000)]);
        assert_eq!(snapshot.total_usage, 1_400_000);
        assert_eq!(
            snapshot.platform_usage,
            BTreeMap::from([("xiaohongshu".to_string(), 900_000)])
        );
    }

    #[test]
    fn platform_total_never_exceeds_total() {
        let rows = vec![
            row("tv.danmaku.bili", 120_000),
            row("com.ss.android.ugc.aweme", 60_000),
            row("tv.danmaku.bili", 30_000),
            row("org.mozilla.firefox", 10_000),
            row("com.xingin.xhs", 0),
        ];
        let snapshot = aggregate_usage(&rows);
        assert!(snapshot.platform_total() <= snapshot.total_usage);
        assert_eq!(snapshot.platform_usage.get("bilibili"), Some(&150_000));
        assert_eq!(snapshot.platform_usage.get("douyin"), Some(&60_000));
        assert!(!snapshot.platform_usage.contains_key("xiaohongshu"));
        assert_eq!(snapshot.total_usage, 220_000);
    }

    #[test]
    fn empty_rows_give_empty_snapshot() {
        assert_eq!(aggregate_usage(&[]), UsageSnapshot::default());
    }

    #[test]
    fn package_totals_merge_duplicates() {
        let totals = totals_by_package(&[row("a", 5), row("a", 7), row("b", -1)]);
        assert_eq!(totals, BTreeMap::from([("a".to_string(), 12)]));
    }
}

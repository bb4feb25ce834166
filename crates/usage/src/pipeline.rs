use std::collections::HashMap;

use chrono::{DateTime, TimeZone};
use focus_core::{
    ForegroundUsage, UsageRecord, aggregate_usage, platform_for_package, totals_by_package,
};
use focus_db::{Db, UsageCursor};

use crate::day::{day_key, day_start};
use crate::types::{RefreshStats, Result};

/// Turns cumulative foreground totals for today into usage records.
///
/// Each package keeps a cursor holding the last total seen on the current
/// local day. Only growth past that cursor is stored, as one record ending at
/// `now`, so repeated refreshes never double count. Growth is capped at the
/// time elapsed since local midnight; the excess is logged and dropped. Cursors from an earlier
/// day count as zero. Tracked platform packages are stored under their
/// platform id; other packages under their package name.
pub fn apply_usage_rows<Tz: TimeZone>(
    db: &mut Db,
    rows: &[ForegroundUsage],
    now: &DateTime<Tz>,
) -> Result<RefreshStats> {
    let today = day_key(now);
    let day_start_ms = day_start(now).timestamp_millis();
    let now_ms = now.timestamp_millis();

    let previous: HashMap<String, UsageCursor> = db
        .list_usage_cursors()?
        .into_iter()
        .map(|cursor| (cursor.package_name.clone(), cursor))
        .collect();

    let totals = totals_by_package(rows);
    let mut records = Vec::new();
    let mut cursors = Vec::with_capacity(totals.len());
    let mut usage_added_ms = 0i64;

    for (package_name, total) in &totals {
        let baseline = previous
            .get(package_name)
            .filter(|cursor| cursor.day == today)
            .map(|cursor| cursor.foreground_millis)
            .unwrap_or(0);
        let mut delta = total - baseline;
        let elapsed = now_ms - day_start_ms;
        if delta > elapsed {
            tracing::warn!(
                package = %package_name,
                delta,
                elapsed,
                "foreground growth exceeds time since midnight; capping"
            );
            delta = elapsed;
        }
        if delta > 0 {
            let app_name = platform_for_package(package_name).unwrap_or(package_name.as_str());
            if let Some(record) = UsageRecord::new(app_name, now_ms - delta, now_ms, now_ms)
            {
                usage_added_ms += delta;
                records.push(record);
            }
        } else if delta < 0 {
            tracing::debug!(
                package = %package_name,
                baseline,
                total,
                "foreground total went backwards; resetting cursor"
            );
        }
        cursors.push(UsageCursor {
            package_name: package_name.clone(),
            day: today.clone(),
            foreground_millis: *total,
            observed_at: now_ms,
        });
    }

    let records_inserted = db.commit_usage_refresh(&records, &cursors)?;
    tracing::info!(
        packages = totals.len(),
        records = records_inserted,
        usage_added_ms,
        "usage refresh applied"
    );

    Ok(RefreshStats {
        packages_seen: totals.len(),
        records_inserted,
        usage_added_ms,
        snapshot: aggregate_usage(rows),
    })
}

use chrono::{DateTime, FixedOffset, TimeZone};
use focus_core::{ForegroundUsage, TimeRange};
use focus_db::Db;
use focus_usage::{apply_usage_rows, today_range};
use tempfile::tempdir;

fn at(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(8 * 3600)
        .expect("offset")
        .with_ymd_and_hms(2026, 10, day, hour, minute, 0)
        .single()
        .expect("time")
}

fn row(package: &str, millis: i64) -> ForegroundUsage {
    ForegroundUsage {
        package_name: package.to_string(),
        total_foreground_millis: millis,
    }
}

fn open_db(dir: &tempfile::TempDir) -> Db {
    let mut db = Db::open(dir.path().join("refresh.sqlite")).expect("open db");
    db.migrate().expect("migrate db");
    db
}

#[test]
fn repeated_refresh_only_stores_growth() {
    let dir = tempdir().expect("temp dir");
    let mut db = open_db(&dir);

    let first = apply_usage_rows(
        &mut db,
        &[row("com.xingin.xhs", 900_000), row("com.other.app", 500_000)],
        &at(19, 10, 0),
    )
    .expect("first refresh");
    assert_eq!(first.records_inserted, 2);
    assert_eq!(first.usage_added_ms, 1_400_000);
    assert_eq!(first.snapshot.total_usage, 1_400_000);
    assert_eq!(
        first.snapshot.platform_usage.get("xiaohongshu"),
        Some(&900_000)
    );

    let second = apply_usage_rows(
        &mut db,
        &[row("com.xingin.xhs", 960_000), row("com.other.app", 500_000)],
        &at(19, 10, 5),
    )
    .expect("second refresh");
    assert_eq!(second.records_inserted, 1);
    assert_eq!(second.usage_added_ms, 60_000);

    let today = today_range(&at(19, 10, 5));
    assert_eq!(db.total_usage_between(&today).expect("total"), 1_460_000);
    let by_app = db.usage_by_app_between(&today).expect("by app");
    assert_eq!(by_app.get("xiaohongshu"), Some(&960_000));
    assert_eq!(by_app.get("com.other.app"), Some(&500_000));
}

#[test]
fn new_day_resets_baseline() {
    let dir = tempdir().expect("temp dir");
    let mut db = open_db(&dir);

    apply_usage_rows(&mut db, &[row("tv.danmaku.bili", 3_600_000)], &at(18, 23, 0))
        .expect("yesterday");
    let stats = apply_usage_rows(&mut db, &[row("tv.danmaku.bili", 600_000)], &at(19, 1, 0))
        .expect("today");
    assert_eq!(stats.records_inserted, 1);
    assert_eq!(stats.usage_added_ms, 600_000);

    let records = db
        .usage_records_in_range(&today_range(&at(19, 1, 0)))
        .expect("records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].app_name, "bilibili");
    assert!(records[0].is_consistent());
}

#[test]
fn growth_is_capped_at_time_since_midnight() {
    let dir = tempdir().expect("temp dir");
    let mut db = open_db(&dir);
    let now = at(19, 0, 10);

    let stats =
        apply_usage_rows(&mut db, &[row("com.other.app", 3_600_000)], &now).expect("refresh");
    assert_eq!(stats.usage_added_ms, 600_000);

    let all = db
        .usage_records_in_range(&TimeRange {
            start: 0,
            end: i64::MAX,
        })
        .expect("records");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].start_time, today_range(&now).start);
    assert_eq!(all[0].end_time, now.timestamp_millis());
    assert_eq!(all[0].duration, 600_000);
}

#[test]
fn today_records_match_today_total_after_stale_export() {
    let dir = tempdir().expect("temp dir");
    let mut db = open_db(&dir);
    let now = at(19, 0, 10);

    apply_usage_rows(
        &mut db,
        &[row("tv.danmaku.bili", 3_600_000), row("com.other.app", 120_000)],
        &now,
    )
    .expect("refresh");

    let today = today_range(&now);
    let records = db.usage_records_in_range(&today).expect("records");
    let summed: i64 = records.iter().map(|record| record.duration).sum();
    assert_eq!(records.len(), 2);
    assert_eq!(summed, db.total_usage_between(&today).expect("total"));
    assert!(records.iter().all(|record| record.end_time <= today.end));
}

#[test]
fn refresh_exactly_at_midnight_stores_nothing() {
    let dir = tempdir().expect("temp dir");
    let mut db = open_db(&dir);

    let stats = apply_usage_rows(&mut db, &[row("com.other.app", 60_000)], &at(19, 0, 0))
        .expect("refresh");
    assert_eq!(stats.records_inserted, 0);
    assert_eq!(db.count_usage_records().expect("count"), 0);
}

#[test]
fn empty_rows_change_nothing() {
    let dir = tempdir().expect("temp dir");
    let mut db = open_db(&dir);
    let stats = apply_usage_rows(&mut db, &[], &at(19, 12, 0)).expect("refresh");
    assert_eq!(stats.records_inserted, 0);
    assert_eq!(stats.packages_seen, 0);
    assert_eq!(db.count_usage_records().expect("count"), 0);
}

#![allow(dead_code)]

use std::path::PathBuf;

use focus_core::{Platform, ReminderInfo, SearchHistoryEntry, UsageRecord};
use focus_db::Db;
use tempfile::TempDir;

pub struct TestDb {
    pub _dir: TempDir,
    pub db: Db,
    pub path: PathBuf,
}

pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("test.sqlite");
    let mut db = Db::open(&path).expect("open db");
    db.migrate().expect("migrate db");
    TestDb {
        _dir: dir,
        db,
        path,
    }
}

pub fn make_record(app_name: &str, start_time: i64, end_time: i64) -> UsageRecord {
    UsageRecord::new(app_name, start_time, end_time, end_time).expect("valid record")
}

pub fn make_search(keyword: &str, platform: &str, search_time: i64) -> SearchHistoryEntry {
    SearchHistoryEntry {
        id: 0,
        keyword: keyword.to_string(),
        platform: platform.to_string(),
        search_time,
        created_at: search_time,
    }
}

pub fn make_platform(id: &str, name: &str) -> Platform {
    Platform {
        id: id.to_string(),
        name: name.to_string(),
        package_name: format!("com.example.{}", id),
        icon: 0,
        is_enabled: true,
        search_url_template: format!("https://{}.example.com/search?q={{keyword}}", id),
    }
}

pub fn make_reminder(app_name: &str, usage_time: i64, timestamp: i64) -> ReminderInfo {
    ReminderInfo {
        id: 0,
        app_name: app_name.to_string(),
        usage_time,
        threshold: 1_800_000,
        timestamp,
    }
}

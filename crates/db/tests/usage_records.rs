mod support;

use focus_core::{TimeRange, UsageRecord};
use focus_db::{DbError, UsageCursor};
use support::{make_record, setup_db};

#[test]
fn range_query_returns_stored_record_unchanged() {
    let test_db = setup_db();
    let db = &test_db.db;
    let mut record = make_record("com.xingin.xhs", 10_000, 70_000);
    record.id = db.insert_usage_record(&record).expect("insert");

    let found = db
        .usage_records_in_range(&TimeRange {
            start: 10_000,
            end: 70_000,
        })
        .expect("range");
    assert_eq!(found, vec![record.clone()]);

    let by_id = db.get_usage_record(record.id).expect("get").expect("record");
    assert_eq!(by_id, record);
}

#[test]
fn range_query_excludes_records_crossing_the_window() {
    let test_db = setup_db();
    let db = &test_db.db;
    db.insert_usage_record(&make_record("a", 0, 50)).expect("insert a");
    db.insert_usage_record(&make_record("b", 100, 200)).expect("insert b");
    db.insert_usage_record(&make_record("c", 150, 400)).expect("insert c");

    let found = db
        .usage_records_in_range(&TimeRange { start: 100, end: 300 })
        .expect("range");
    let names: Vec<_> = found.iter().map(|r| r.app_name.as_str()).collect();
    assert_eq!(names, vec!["b"]);
}

#[test]
fn insert_with_existing_id_replaces_row() {
    let test_db = setup_db();
    let db = &test_db.db;
    let id = db
        .insert_usage_record(&make_record("a", 0, 10))
        .expect("insert");
    let mut replacement = make_record("b", 5, 25);
    replacement.id = id;
    db.insert_usage_record(&replacement).expect("replace");

    assert_eq!(db.count_usage_records().expect("count"), 1);
    let stored = db.get_usage_record(id).expect("get").expect("record");
    assert_eq!(stored.app_name, "b");
    assert_eq!(stored.duration, 20);
}

#[test]
fn inconsistent_record_is_rejected() {
    let test_db = setup_db();
    let record = UsageRecord {
        id: 0,
        app_name: "a".to_string(),
        start_time: 0,
        end_time: 100,
        duration: 50,
        created_at: 100,
    };
    let err = test_db.db.insert_usage_record(&record).expect_err("reject");
    assert!(matches!(err, DbError::InvalidRecord(_)));
}

#[test]
fn totals_group_by_app_within_window() {
    let test_db = setup_db();
    let db = &test_db.db;
    db.insert_usage_record(&make_record("a", 1_000, 2_000)).expect("a1");
    db.insert_usage_record(&make_record("a", 3_000, 3_500)).expect("a2");
    db.insert_usage_record(&make_record("b", 4_000, 4_250)).expect("b");
    db.insert_usage_record(&make_record("b", 999, 1_999)).expect("before window");

    let range = TimeRange {
        start: 1_000,
        end: 10_000,
    };
    assert_eq!(db.total_usage_between(&range).expect("total"), 1_750);
    let by_app = db.usage_by_app_between(&range).expect("by app");
    assert_eq!(by_app.get("a"), Some(&1_500));
    assert_eq!(by_app.get("b"), Some(&250));

    let empty = TimeRange {
        start: 50_000,
        end: 60_000,
    };
    assert_eq!(db.total_usage_between(&empty).expect("empty total"), 0);
}

#[test]
fn delete_and_clear() {
    let test_db = setup_db();
    let db = &test_db.db;
    let id = db.insert_usage_record(&make_record("a", 0, 10)).expect("a");
    db.insert_usage_record(&make_record("b", 0, 10)).expect("b");

    assert!(db.delete_usage_record(id).expect("delete"));
    assert!(!db.delete_usage_record(id).expect("delete again"));
    assert_eq!(db.count_usage_records().expect("count"), 1);

    assert_eq!(db.clear_usage_records().expect("clear"), 1);
    assert_eq!(db.count_usage_records().expect("count"), 0);
}

#[test]
fn refresh_commit_writes_records_and_cursors_together() {
    let mut test_db = setup_db();
    let db = &mut test_db.db;
    let records = vec![make_record("com.xingin.xhs", 40_000, 100_000)];
    let cursors = vec![UsageCursor {
        package_name: "com.xingin.xhs".to_string(),
        day: "2026-10-19".to_string(),
        foreground_millis: 60_000,
        observed_at: 100_000,
    }];
    let inserted = db.commit_usage_refresh(&records, &cursors).expect("commit");
    assert_eq!(inserted, 1);
    assert_eq!(db.list_usage_cursors().expect("cursors"), cursors);

    let mut advanced = cursors[0].clone();
    advanced.foreground_millis = 90_000;
    db.commit_usage_refresh(&[], &[advanced.clone()])
        .expect("advance");
    assert_eq!(db.list_usage_cursors().expect("cursors"), vec![advanced]);
    assert_eq!(db.count_usage_records().expect("count"), 1);
}

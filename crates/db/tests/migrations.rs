use rusqlite::Connection;

#[test]
fn migrate_is_idempotent_and_tracks_versions() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("migrate.sqlite");

    let mut db = focus_db::Db::open(&db_path).expect("open db");
    db.migrate().expect("first migrate");
    db.migrate().expect("second migrate");

    let applied = db.applied_migrations().expect("applied");
    let expected: Vec<String> = focus_db::MIGRATIONS
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();
    assert_eq!(applied, expected);

    let conn = Connection::open(&db_path).expect("open conn");
    for table in [
        "usage_records",
        "search_history",
        "user_settings",
        "platforms",
        "reminders",
        "app_state",
        "usage_cursor",
    ] {
        let found: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |row| row.get(0),
            )
            .expect("table lookup");
        assert_eq!(found, 1, "missing table {table}");
    }
}

#[test]
fn migrate_keeps_rows_from_earlier_schema() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("upgrade.sqlite");
    {
        let conn = Connection::open(&db_path).expect("open conn");
        conn.execute_batch(include_str!("../migrations/0001_init.sql"))
            .expect("apply 0001");
        conn.execute_batch(
            r#"
            CREATE TABLE schema_migrations (name TEXT PRIMARY KEY, applied_at TEXT NOT NULL);
            INSERT INTO schema_migrations (name, applied_at) VALUES ('0001_init', '2026-01-01T00:00:00Z');
            INSERT INTO usage_records (app_name, start_time, end_time, duration, created_at)
            VALUES ('com.xingin.xhs', 1000, 2000, 1000, 2000);
            "#,
        )
        .expect("seed");
    }

    let mut db = focus_db::Db::open(&db_path).expect("open db");
    db.migrate().expect("migrate");
    assert_eq!(db.count_usage_records().expect("count"), 1);
    assert!(db.list_usage_cursors().expect("cursors").is_empty());
}

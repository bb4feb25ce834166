mod support;

use focus_db::RECENT_SEARCH_LIMIT;
use support::{make_search, setup_db};

#[test]
fn recent_history_is_newest_first_and_capped() {
    let test_db = setup_db();
    let db = &test_db.db;
    for i in 0..12 {
        db.insert_search_history(&make_search(&format!("kw{i}"), "douyin", 1_000 + i))
            .expect("insert");
    }

    let recent = db
        .recent_search_history(RECENT_SEARCH_LIMIT)
        .expect("recent");
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].keyword, "kw11");
    assert_eq!(recent[9].keyword, "kw2");
}

#[test]
fn delete_by_id_and_clear() {
    let test_db = setup_db();
    let db = &test_db.db;
    let id = db
        .insert_search_history(&make_search("coffee", "xiaohongshu", 10))
        .expect("insert");
    db.insert_search_history(&make_search("tea", "bilibili", 20))
        .expect("insert");

    assert!(db.delete_search_history(id).expect("delete"));
    let remaining = db.recent_search_history(10).expect("recent");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].keyword, "tea");

    assert_eq!(db.clear_search_history().expect("clear"), 1);
    assert!(db.recent_search_history(10).expect("recent").is_empty());
}

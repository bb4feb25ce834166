mod support;

use focus_core::SearchHistoryEntry;

use support::setup_app;

#[test]
fn builds_urls_for_builtin_and_unknown_platforms() {
    let app = setup_app();
    let search = &app.state.services.search;

    assert_eq!(
        search.search_url("cat food", "bilibili").expect("url"),
        "https://search.bilibili.com/all?keyword=cat+food"
    );
    assert_eq!(
        search.search_url("rust", "nowhere").expect("fallback"),
        "https://www.google.com/search?q=rust"
    );
}

#[test]
fn uses_stored_platform_templates() {
    let app = setup_app();
    let services = &app.state.services;
    services
        .platforms
        .add(&focus_core::Platform {
            id: "zhihu".to_string(),
            name: "知乎".to_string(),
            package_name: "com.zhihu.android".to_string(),
            icon: 0,
            is_enabled: true,
            search_url_template: "https://www.zhihu.com/search?q={keyword}".to_string(),
        })
        .expect("add platform");
    assert_eq!(
        services.search.search_url("a&b", "zhihu").expect("url"),
        "https://www.zhihu.com/search?q=a%26b"
    );
}

#[test]
fn blank_keyword_is_unsuccessful_and_not_recorded() {
    let app = setup_app();
    let search = &app.state.services.search;

    let result = search.perform("   ", "douyin").expect("perform");
    assert!(!result.is_success);
    assert!(result.error_message.is_some());
    assert!(search.recent().expect("history").is_empty());

    let result = search.perform(" lipstick ", "douyin").expect("perform");
    assert!(result.is_success);
    assert_eq!(result.url, "https://www.douyin.com/search/lipstick");
    let history = search.recent().expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].keyword, "lipstick");
}

#[test]
fn history_keeps_ten_newest() {
    let app = setup_app();
    let search = &app.state.services.search;
    for index in 0..12 {
        search
            .save(&SearchHistoryEntry {
                id: 0,
                keyword: format!("keyword-{}", index),
                platform: "xiaohongshu".to_string(),
                search_time: 1_000 + index,
                created_at: 1_000 + index,
            })
            .expect("save");
    }
    let history = search.recent().expect("history");
    assert_eq!(history.len(), 10);
    assert_eq!(history[0].keyword, "keyword-11");
    assert_eq!(history[9].keyword, "keyword-2");

    assert!(search.delete(history[0].id).expect("delete"));
    assert_eq!(search.clear().expect("clear"), 11);
}

use serde::Serialize;

use focus_core::{ReminderInfo, UsageSnapshot, UsageStats, UserSettings};
use focus_usage::RefreshStats;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub today_usage: i64,
    pub platform_usage: std::collections::BTreeMap<String, i64>,
    pub usage_stats: UsageStats,
    pub live: UsageSnapshot,
    pub settings: UserSettings,
    pub should_show_reminder: bool,
    pub dismissed_until: i64,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    #[serde(flatten)]
    pub stats: RefreshStats,
    pub reminders: Vec<ReminderInfo>,
}

#[derive(Serialize)]
pub struct SearchUrlResponse {
    pub keyword: String,
    pub platform: String,
    pub url: String,
}

#[derive(Serialize)]
pub struct SettingsResponse {
    #[serde(flatten)]
    pub settings: UserSettings,
    pub db_path: String,
    pub app_data_dir: String,
}

#[derive(Serialize)]
pub struct ReminderCheckResponse {
    pub app_name: String,
    pub current_usage: i64,
    pub threshold: i64,
    pub should_show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct DismissResponse {
    pub dismissed_until: i64,
}

#[derive(Serialize)]
pub struct UpdatedResponse {
    pub updated: i64,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub deleted: i64,
}

#[derive(Serialize)]
pub struct ClearedResponse {
    pub cleared: i64,
}

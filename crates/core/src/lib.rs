mod aggregate;
mod platform;
mod reminder;
mod search;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use aggregate::{aggregate_usage, platform_for_package, totals_by_package};
pub use platform::{
    BILIBILI, DOUYIN, FALLBACK_SEARCH_URL_TEMPLATE, KEYWORD_PLACEHOLDER, XIAOHONGSHU,
    builtin_platform, builtin_platforms, merge_platforms,
};
pub use reminder::{DEFAULT_REMINDER_THRESHOLD_MS, format_duration, should_show_reminder};
pub use search::{encode_keyword, fill_search_template};

pub const MINUTE_MS: i64 = 60 * 1000;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Default reminder interval for a fresh install (30 minutes).
pub const DEFAULT_REMINDER_INTERVAL_MS: i64 = 30 * MINUTE_MS;
pub const DEFAULT_PLATFORM_ID: &str = XIAOHONGSHU;

/// One observed foreground session of an app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub id: i64,
    pub app_name: String,
    pub start_time: i64,
    pub end_time: i64,
    pub duration: i64,
    pub created_at: i64,
}

impl UsageRecord {
    /// Builds a record whose duration is derived from its bounds. Returns
    /// `None` when `end_time` precedes `start_time`.
    pub fn new(app_name: &str, start_time: i64, end_time: i64, created_at: i64) -> Option<Self> {
        if end_time < start_time {
            return None;
        }
        Some(Self {
            id: 0,
            app_name: app_name.to_string(),
            start_time,
            end_time,
            duration: end_time - start_time,
            created_at,
        })
    }

    pub fn is_consistent(&self) -> bool {
        self.end_time >= self.start_time && self.duration == self.end_time - self.start_time
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub id: i64,
    pub keyword: String,
    pub platform: String,
    pub search_time: i64,
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderMethod {
    Popup,
    Vibration,
    Sound,
}

impl ReminderMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popup => "POPUP",
            Self::Vibration => "VIBRATION",
            Self::Sound => "SOUND",
        }
    }
}

impl fmt::Display for ReminderMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderMethod {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "POPUP" => Ok(Self::Popup),
            "VIBRATION" => Ok(Self::Vibration),
            "SOUND" => Ok(Self::Sound),
            other => Err(format!("unknown reminder method {}", other)),
        }
    }
}

/// Joins methods into the comma separated column form.
pub fn join_reminder_methods(methods: &BTreeSet<ReminderMethod>) -> String {
    methods
        .iter()
        .map(ReminderMethod::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn split_reminder_methods(value: &str) -> Result<BTreeSet<ReminderMethod>, String> {
    if value.trim().is_empty() {
        return Ok(BTreeSet::new());
    }
    value.split(',').map(ReminderMethod::from_str).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub reminder_interval: i64,
    pub reminder_methods: BTreeSet<ReminderMethod>,
    pub default_platform: String,
    pub is_service_enabled: bool,
    pub last_updated: i64,
}

impl UserSettings {
    /// The record returned when nothing has been stored yet.
    pub fn defaults(now: i64) -> Self {
        Self {
            reminder_interval: DEFAULT_REMINDER_INTERVAL_MS,
            reminder_methods: BTreeSet::from([ReminderMethod::Popup]),
            default_platform: DEFAULT_PLATFORM_ID.to_string(),
            is_service_enabled: true,
            last_updated: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub package_name: String,
    pub icon: i64,
    pub is_enabled: bool,
    pub search_url_template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderInfo {
    pub id: i64,
    pub app_name: String,
    pub usage_time: i64,
    pub threshold: i64,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub today_usage: i64,
    pub week_usage: i64,
    pub month_usage: i64,
    pub platform_usage: BTreeMap<String, i64>,
}

impl UsageStats {
    /// Week and month figures are straight multiples of today's usage.
    pub fn from_today(today_usage: i64, platform_usage: BTreeMap<String, i64>) -> Self {
        Self {
            today_usage,
            week_usage: today_usage.saturating_mul(7),
            month_usage: today_usage.saturating_mul(30),
            platform_usage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub keyword: String,
    pub platform: String,
    pub url: String,
    pub is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Raw per-package foreground time as reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForegroundUsage {
    pub package_name: String,
    pub total_foreground_millis: i64,
}

/// Aggregated view of one OS usage query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    pub total_usage: i64,
    pub platform_usage: BTreeMap<String, i64>,
}

impl UsageSnapshot {
    pub fn platform_total(&self) -> i64 {
        self.platform_usage.values().sum()
    }
}

/// Half-open `[start, end)` window in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    pub fn trailing(end: i64, length_ms: i64) -> Self {
        Self {
            start: end - length_ms,
            end,
        }
    }

    pub fn contains(&self, start_time: i64, end_time: i64) -> bool {
        start_time >= self.start && end_time <= self.end
    }
}

use serde::Deserialize;

use focus_app::{SettingToggle, SettingsPatch};
use focus_core::{Platform, ReminderMethod};

#[derive(Debug, Deserialize, Default)]
pub struct EmptyRequest {}

#[derive(Debug, Deserialize)]
pub struct RangeRequest {
    pub range: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct IdRequest {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub keyword: String,
    /// Falls back to the configured default platform.
    pub platform: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlatformIdRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct PlatformRequest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub package_name: String,
    #[serde(default)]
    pub icon: i64,
    pub is_enabled: Option<bool>,
    #[serde(default)]
    pub search_url_template: String,
}

impl From<PlatformRequest> for Platform {
    fn from(req: PlatformRequest) -> Self {
        Platform {
            id: req.id.trim().to_string(),
            name: req.name.trim().to_string(),
            package_name: req.package_name,
            icon: req.icon,
            is_enabled: req.is_enabled.unwrap_or(true),
            search_url_template: req.search_url_template,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlatformEnableRequest {
    pub id: String,
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct SettingsPutRequest {
    pub reminder_interval: Option<i64>,
    pub reminder_methods: Option<Vec<ReminderMethod>>,
    pub default_platform: Option<String>,
    pub is_service_enabled: Option<bool>,
}

impl From<SettingsPutRequest> for SettingsPatch {
    fn from(req: SettingsPutRequest) -> Self {
        SettingsPatch {
            reminder_interval: req.reminder_interval,
            reminder_methods: req
                .reminder_methods
                .map(|methods| methods.into_iter().collect()),
            default_platform: req.default_platform,
            is_service_enabled: req.is_service_enabled,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleSettingRequest {
    pub setting: SettingToggle,
    pub enabled: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ReminderCheckRequest {
    pub app_name: String,
    /// Defaults to today's stored usage across all apps.
    pub current_usage: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ReminderDismissRequest {
    pub until: Option<i64>,
    pub minutes: Option<i64>,
}

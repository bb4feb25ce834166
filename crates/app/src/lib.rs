pub mod app;
pub mod config;
pub mod error;
pub mod services;
pub mod startup;
pub mod util;

pub use app::{AppConfig, AppState};
pub use config::RangeParams;
pub use error::{ApiError, AppError, Result};
pub use services::{
    AppServices, MAX_REMINDER_INTERVAL_MS, PlatformService, ReminderService, SearchService,
    SettingsPatch, SettingsService, SettingToggle, UsageService,
};
pub use startup::{AppPaths, ensure_app_data_dir};
pub use util::time::{now_ms, resolve_range};

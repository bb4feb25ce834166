mod platforms;
mod reminders;
mod search;
mod settings;
mod usage;

use std::sync::Arc;

use crate::app::AppConfig;
use crate::error::{AppError, Result};
use focus_db::Db;
use focus_usage::UsageSnapshotProvider;

pub use platforms::PlatformService;
pub use reminders::ReminderService;
pub use search::SearchService;
pub use settings::{MAX_REMINDER_INTERVAL_MS, SettingToggle, SettingsPatch, SettingsService};
pub use usage::UsageService;

type SharedConfig = Arc<AppConfig>;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub usage: UsageService,
    pub search: SearchService,
    pub settings: SettingsService,
    pub platforms: PlatformService,
    pub reminders: ReminderService,
}

impl AppServices {
    pub fn new(config: &AppConfig, provider: Arc<dyn UsageSnapshotProvider>) -> Self {
        let shared = Arc::new(config.clone());
        let platforms = PlatformService::new(shared.clone());
        Self {
            usage: UsageService::new(shared.clone(), provider),
            search: SearchService::new(shared.clone(), platforms.clone()),
            settings: SettingsService::new(shared.clone(), platforms.clone()),
            platforms,
            reminders: ReminderService::new(shared),
        }
    }
}

fn open_db(config: &SharedConfig) -> Result<Db> {
    Ok(Db::open(&config.db_path)?)
}

fn missing_platform(id: &str) -> AppError {
    AppError::NotFound(format!("platform {} not found", id))
}

fn join_error(err: tokio::task::JoinError) -> AppError {
    AppError::Message(format!("background task failed: {}", err))
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::services::{PlatformService, SharedConfig, open_db};
use crate::util::time::now_ms;
use focus_core::{DAY_MS, ReminderMethod, UserSettings};

/// Longest reminder interval accepted (one day).
pub const MAX_REMINDER_INTERVAL_MS: i64 = DAY_MS;
use focus_db::Db;

/// Boolean switches exposed by the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingToggle {
    Service,
    Popup,
    Vibration,
    Sound,
}

/// Optional field updates applied on top of whatever is stored at write time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub reminder_interval: Option<i64>,
    pub reminder_methods: Option<BTreeSet<ReminderMethod>>,
    pub default_platform: Option<String>,
    pub is_service_enabled: Option<bool>,
}

#[derive(Clone)]
pub struct SettingsService {
    config: SharedConfig,
    platforms: PlatformService,
}

impl SettingsService {
    pub(super) fn new(config: SharedConfig, platforms: PlatformService) -> Self {
        Self { config, platforms }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    /// Stored settings, or the defaults when nothing was saved yet.
    pub fn get(&self) -> Result<UserSettings> {
        let db = self.db()?;
        Ok(db
            .load_settings()?
            .unwrap_or_else(|| UserSettings::defaults(now_ms())))
    }

    /// Replaces every field; `last_updated` is stamped with the current time.
    pub fn update(&self, settings: UserSettings) -> Result<UserSettings> {
        validate_interval(settings.reminder_interval)?;
        self.validate_platform(&settings.default_platform)?;
        self.modify(move |current| {
            *current = settings;
        })
    }

    /// Applies only the fields present in `patch`, inside the same
    /// transaction that reads the current record.
    pub fn patch(&self, patch: SettingsPatch) -> Result<UserSettings> {
        if let Some(interval) = patch.reminder_interval {
            validate_interval(interval)?;
        }
        let default_platform = match patch.default_platform {
            Some(platform) => {
                let platform = platform.trim().to_string();
                self.validate_platform(&platform)?;
                Some(platform)
            }
            None => None,
        };
        self.modify(move |current| {
            if let Some(interval) = patch.reminder_interval {
                current.reminder_interval = interval;
            }
            if let Some(methods) = patch.reminder_methods {
                current.reminder_methods = methods;
            }
            if let Some(platform) = default_platform {
                current.default_platform = platform;
            }
            if let Some(enabled) = patch.is_service_enabled {
                current.is_service_enabled = enabled;
            }
        })
    }

    pub fn update_reminder_interval(&self, interval: i64) -> Result<UserSettings> {
        validate_interval(interval)?;
        self.modify(|settings| settings.reminder_interval = interval)
    }

    pub fn update_reminder_methods(
        &self,
        methods: impl IntoIterator<Item = ReminderMethod>,
    ) -> Result<UserSettings> {
        let methods: BTreeSet<ReminderMethod> = methods.into_iter().collect();
        self.modify(|settings| settings.reminder_methods = methods)
    }

    pub fn update_default_platform(&self, platform_id: &str) -> Result<UserSettings> {
        self.validate_platform(platform_id)?;
        let platform_id = platform_id.to_string();
        self.modify(|settings| settings.default_platform = platform_id)
    }

    pub fn set_service_enabled(&self, enabled: bool) -> Result<UserSettings> {
        self.modify(|settings| settings.is_service_enabled = enabled)
    }

    /// Sets a switch to `enabled`, or flips it when `enabled` is `None`.
    pub fn toggle(&self, toggle: SettingToggle, enabled: Option<bool>) -> Result<UserSettings> {
        self.modify(|settings| match toggle {
            SettingToggle::Service => {
                settings.is_service_enabled = enabled.unwrap_or(!settings.is_service_enabled);
            }
            SettingToggle::Popup => toggle_method(settings, ReminderMethod::Popup, enabled),
            SettingToggle::Vibration => toggle_method(settings, ReminderMethod::Vibration, enabled),
            SettingToggle::Sound => toggle_method(settings, ReminderMethod::Sound, enabled),
        })
    }

    fn modify<F>(&self, update: F) -> Result<UserSettings>
    where
        F: FnOnce(&mut UserSettings),
    {
        let mut db = self.db()?;
        let settings = db.update_settings_with(now_ms(), update)?;
        tracing::debug!(
            interval = settings.reminder_interval,
            platform = %settings.default_platform,
            enabled = settings.is_service_enabled,
            "settings updated"
        );
        Ok(settings)
    }

    fn validate_platform(&self, platform_id: &str) -> Result<()> {
        if platform_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "default platform is required".to_string(),
            ));
        }
        if self.platforms.get(platform_id)?.is_none() {
            return Err(AppError::InvalidInput(format!(
                "unknown platform {}",
                platform_id
            )));
        }
        Ok(())
    }
}

fn validate_interval(interval: i64) -> Result<()> {
    if interval <= 0 || interval > MAX_REMINDER_INTERVAL_MS {
        return Err(AppError::InvalidInput(format!(
            "reminder interval must be between 1 and {} ms, got {}",
            MAX_REMINDER_INTERVAL_MS, interval
        )));
    }
    Ok(())
}

fn toggle_method(settings: &mut UserSettings, method: ReminderMethod, enabled: Option<bool>) {
    let enabled = enabled.unwrap_or(!settings.reminder_methods.contains(&method));
    if enabled {
        settings.reminder_methods.insert(method);
    } else {
        settings.reminder_methods.remove(&method);
    }
}

use std::collections::BTreeMap;

use crate::error::Result;
use crate::services::{SharedConfig, open_db};
use crate::util::time::now_ms;
use focus_core::{DEFAULT_REMINDER_THRESHOLD_MS, ReminderInfo, UserSettings, should_show_reminder};
use focus_db::Db;

#[derive(Clone)]
pub struct ReminderService {
    config: SharedConfig,
}

impl ReminderService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn should_show(&self, app_name: &str, current_usage: i64) -> Result<bool> {
        self.should_show_at(app_name, current_usage, now_ms())
    }

    pub fn should_show_at(&self, app_name: &str, current_usage: i64, now: i64) -> Result<bool> {
        let db = self.db()?;
        let dismissed_until = db.get_reminder_dismissed_until()?;
        Ok(should_show_reminder(
            app_name,
            current_usage,
            now,
            dismissed_until,
        ))
    }

    pub fn dismissed_until(&self) -> Result<i64> {
        let db = self.db()?;
        Ok(db.get_reminder_dismissed_until()?)
    }

    pub fn set_dismissed_until(&self, until: i64) -> Result<()> {
        let db = self.db()?;
        db.set_reminder_dismissed_until(until)?;
        tracing::info!(until, "reminders dismissed");
        Ok(())
    }

    pub fn save(&self, reminder: &ReminderInfo) -> Result<i64> {
        let db = self.db()?;
        Ok(db.insert_reminder(reminder)?)
    }

    /// Every recorded reminder, newest first.
    pub fn list(&self) -> Result<Vec<ReminderInfo>> {
        let db = self.db()?;
        Ok(db.list_reminders()?)
    }

    pub fn latest_per_app(&self) -> Result<Vec<ReminderInfo>> {
        let db = self.db()?;
        Ok(db.latest_reminders_per_app()?)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let db = self.db()?;
        Ok(db.delete_reminder(id)?)
    }

    pub fn clear(&self) -> Result<usize> {
        let db = self.db()?;
        Ok(db.clear_reminders()?)
    }

    /// Records a reminder for every app over the threshold, unless the
    /// service is off, reminders are dismissed, or the app was already
    /// reminded within the configured interval. Returns the new reminders.
    pub fn check_usage(
        &self,
        usage_by_app: &BTreeMap<String, i64>,
        now: i64,
    ) -> Result<Vec<ReminderInfo>> {
        let db = self.db()?;
        let settings = db
            .load_settings()?
            .unwrap_or_else(|| UserSettings::defaults(now));
        if !settings.is_service_enabled {
            tracing::debug!("reminder check skipped; service disabled");
            return Ok(Vec::new());
        }
        let dismissed_until = db.get_reminder_dismissed_until()?;

        let mut fired = Vec::new();
        for (app_name, usage) in usage_by_app {
            if !should_show_reminder(app_name, *usage, now, dismissed_until) {
                continue;
            }
            if let Some(last) = db.latest_reminder_for_app(app_name)? {
                if now - last.timestamp < settings.reminder_interval {
                    continue;
                }
            }
            let mut reminder = ReminderInfo {
                id: 0,
                app_name: app_name.clone(),
                usage_time: *usage,
                threshold: DEFAULT_REMINDER_THRESHOLD_MS,
                timestamp: now,
            };
            reminder.id = db.insert_reminder(&reminder)?;
            fired.push(reminder);
        }
        Ok(fired)
    }
}

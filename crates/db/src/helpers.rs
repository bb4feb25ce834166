use focus_core::{
    Platform, ReminderInfo, SearchHistoryEntry, UsageRecord, UserSettings, split_reminder_methods,
};
use rusqlite::Row;
use rusqlite::types::Type;

use crate::types::UsageCursor;

pub(crate) fn row_to_usage_record(
    row: &Row<'_>,
) -> std::result::Result<UsageRecord, rusqlite::Error> {
    Ok(UsageRecord {
        id: row.get(0)?,
        app_name: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        duration: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub(crate) fn row_to_search_history(
    row: &Row<'_>,
) -> std::result::Result<SearchHistoryEntry, rusqlite::Error> {
    Ok(SearchHistoryEntry {
        id: row.get(0)?,
        keyword: row.get(1)?,
        platform: row.get(2)?,
        search_time: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub(crate) fn row_to_settings(row: &Row<'_>) -> std::result::Result<UserSettings, rusqlite::Error> {
    let methods: String = row.get(1)?;
    let reminder_methods = split_reminder_methods(&methods).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::from(err))
    })?;
    Ok(UserSettings {
        reminder_interval: row.get(0)?,
        reminder_methods,
        default_platform: row.get(2)?,
        is_service_enabled: row.get(3)?,
        last_updated: row.get(4)?,
    })
}

pub(crate) fn row_to_platform(row: &Row<'_>) -> std::result::Result<Platform, rusqlite::Error> {
    Ok(Platform {
        id: row.get(0)?,
        name: row.get(1)?,
        package_name: row.get(2)?,
        icon: row.get(3)?,
        is_enabled: row.get(4)?,
        search_url_template: row.get(5)?,
    })
}

pub(crate) fn row_to_reminder(row: &Row<'_>) -> std::result::Result<ReminderInfo, rusqlite::Error> {
    Ok(ReminderInfo {
        id: row.get(0)?,
        app_name: row.get(1)?,
        usage_time: row.get(2)?,
        threshold: row.get(3)?,
        timestamp: row.get(4)?,
    })
}

pub(crate) fn row_to_usage_cursor(
    row: &Row<'_>,
) -> std::result::Result<UsageCursor, rusqlite::Error> {
    Ok(UsageCursor {
        package_name: row.get(0)?,
        day: row.get(1)?,
        foreground_millis: row.get(2)?,
        observed_at: row.get(3)?,
    })
}

/// Stored ids are positive; zero or negative means "assign one".
pub(crate) fn assigned_id(id: i64) -> Option<i64> {
    (id > 0).then_some(id)
}

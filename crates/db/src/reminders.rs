use focus_core::ReminderInfo;
use rusqlite::{OptionalExtension, params};

use crate::Db;
use crate::error::Result;
use crate::helpers::{assigned_id, row_to_reminder};

impl Db {
    pub fn insert_reminder(&self, reminder: &ReminderInfo) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO reminders (id, app_name, usage_time, threshold, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                assigned_id(reminder.id),
                reminder.app_name,
                reminder.usage_time,
                reminder.threshold,
                reminder.timestamp,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Every recorded reminder, newest first.
    pub fn list_reminders(&self) -> Result<Vec<ReminderInfo>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, app_name, usage_time, threshold, timestamp
            FROM reminders
            ORDER BY timestamp DESC, id DESC
            "#,
        )?;
        let rows = stmt.query_map([], row_to_reminder)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub fn latest_reminder_for_app(&self, app_name: &str) -> Result<Option<ReminderInfo>> {
        Ok(self
            .conn
            .query_row(
                r#"
                SELECT id, app_name, usage_time, threshold, timestamp
                FROM reminders
                WHERE app_name = ?1
                ORDER BY timestamp DESC, id DESC
                LIMIT 1
                "#,
                params![app_name],
                row_to_reminder,
            )
            .optional()?)
    }

    /// The most recent reminder of each app, newest first.
    pub fn latest_reminders_per_app(&self) -> Result<Vec<ReminderInfo>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT r.id, r.app_name, r.usage_time, r.threshold, r.timestamp
            FROM reminders r
            WHERE r.id = (
              SELECT r2.id
              FROM reminders r2
              WHERE r2.app_name = r.app_name
              ORDER BY r2.timestamp DESC, r2.id DESC
              LIMIT 1
            )
            ORDER BY r.timestamp DESC, r.id DESC
            "#,
        )?;
        let rows = stmt.query_map([], row_to_reminder)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub fn delete_reminder(&self, id: i64) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM reminders WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn clear_reminders(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM reminders", [])?)
    }
}

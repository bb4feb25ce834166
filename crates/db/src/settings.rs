use focus_core::{UserSettings, join_reminder_methods};
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};

use crate::Db;
use crate::error::Result;
use crate::helpers::row_to_settings;

impl Db {
    /// The stored settings row, if one was ever written.
    pub fn load_settings(&self) -> Result<Option<UserSettings>> {
        load_settings(&self.conn)
    }

    /// Replaces the singleton settings row.
    pub fn save_settings(&self, settings: &UserSettings) -> Result<()> {
        save_settings(&self.conn, settings)
    }

    /// Read-modify-write of the settings row under a write lock, so two
    /// writers touching different fields cannot clobber each other.
    /// `last_updated` is stamped with `now`.
    pub fn update_settings_with<F>(&mut self, now: i64, update: F) -> Result<UserSettings>
    where
        F: FnOnce(&mut UserSettings),
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut settings = load_settings(&tx)?.unwrap_or_else(|| UserSettings::defaults(now));
        update(&mut settings);
        settings.last_updated = now;
        save_settings(&tx, &settings)?;
        tx.commit()?;
        Ok(settings)
    }
}

fn load_settings(conn: &Connection) -> Result<Option<UserSettings>> {
    Ok(conn
        .query_row(
            r#"
            SELECT reminder_interval, reminder_methods, default_platform,
                   is_service_enabled, last_updated
            FROM user_settings
            WHERE id = 1
            "#,
            [],
            row_to_settings,
        )
        .optional()?)
}

fn save_settings(conn: &Connection, settings: &UserSettings) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO user_settings (
          id, reminder_interval, reminder_methods, default_platform,
          is_service_enabled, last_updated
        ) VALUES (1, ?1, ?2, ?3, ?4, ?5)
        ON CONFLICT(id) DO UPDATE SET
          reminder_interval = excluded.reminder_interval,
          reminder_methods = excluded.reminder_methods,
          default_platform = excluded.default_platform,
          is_service_enabled = excluded.is_service_enabled,
          last_updated = excluded.last_updated
        "#,
        params![
            settings.reminder_interval,
            join_reminder_methods(&settings.reminder_methods),
            settings.default_platform,
            settings.is_service_enabled,
            settings.last_updated,
        ],
    )?;
    Ok(())
}

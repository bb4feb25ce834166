use rusqlite::params;

use crate::Db;
use crate::error::Result;

const REMINDER_DISMISSED_UNTIL: &str = "reminder_dismissed_until";

impl Db {
    pub fn get_state(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM app_state WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row.get::<_, String>(0)?))
        } else {
            Ok(None)
        }
    }

    pub fn set_state(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO app_state (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    /// Epoch millis before which reminders are suppressed; 0 when never set.
    pub fn get_reminder_dismissed_until(&self) -> Result<i64> {
        let until = self
            .get_state(REMINDER_DISMISSED_UNTIL)?
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or(0);
        Ok(until)
    }

    pub fn set_reminder_dismissed_until(&self, until: i64) -> Result<()> {
        self.set_state(REMINDER_DISMISSED_UNTIL, &until.to_string())
    }
}

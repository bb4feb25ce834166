use rusqlite::params;

use focus_core::UsageRecord;

use crate::Db;
use crate::error::Result;
use crate::helpers::row_to_usage_cursor;
use crate::types::UsageCursor;
use crate::usage_records::insert_usage_record;

impl Db {
    pub fn list_usage_cursors(&self) -> Result<Vec<UsageCursor>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT package_name, day, foreground_millis, observed_at
            FROM usage_cursor
            ORDER BY package_name ASC
            "#,
        )?;
        let rows = stmt.query_map([], row_to_usage_cursor)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Stores new usage records and advances cursors atomically, so a failed
    /// refresh neither loses nor double counts foreground time.
    pub fn commit_usage_refresh(
        &mut self,
        records: &[UsageRecord],
        cursors: &[UsageCursor],
    ) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for record in records {
            insert_usage_record(&tx, record)?;
        }
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO usage_cursor (package_name, day, foreground_millis, observed_at)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(package_name) DO UPDATE SET
                  day = excluded.day,
                  foreground_millis = excluded.foreground_millis,
                  observed_at = excluded.observed_at
                "#,
            )?;
            for cursor in cursors {
                stmt.execute(params![
                    cursor.package_name,
                    cursor.day,
                    cursor.foreground_millis,
                    cursor.observed_at,
                ])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }

    pub fn clear_usage_cursors(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM usage_cursor", [])?)
    }
}

use std::collections::BTreeMap;

use focus_core::{TimeRange, UsageRecord};
use rusqlite::{Connection, params};

use crate::Db;
use crate::error::{DbError, Result};
use crate::helpers::{assigned_id, row_to_usage_record};

impl Db {
    /// Inserts a record, replacing any row with the same id. Returns the row id.
    pub fn insert_usage_record(&self, record: &UsageRecord) -> Result<i64> {
        insert_usage_record(&self.conn, record)
    }

    pub fn insert_usage_records(&mut self, records: &[UsageRecord]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }
        let tx = self.conn.transaction()?;
        for record in records {
            insert_usage_record(&tx, record)?;
        }
        tx.commit()?;
        Ok(records.len())
    }

    /// Records that lie entirely inside `range`, oldest first.
    pub fn usage_records_in_range(&self, range: &TimeRange) -> Result<Vec<UsageRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, app_name, start_time, end_time, duration, created_at
            FROM usage_records
            WHERE start_time >= ?1 AND end_time <= ?2
            ORDER BY start_time ASC, id ASC
            "#,
        )?;
        let rows = stmt.query_map(params![range.start, range.end], row_to_usage_record)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub fn get_usage_record(&self, id: i64) -> Result<Option<UsageRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, app_name, start_time, end_time, duration, created_at
            FROM usage_records
            WHERE id = ?1
            "#,
        )?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row_to_usage_record(row)?))
        } else {
            Ok(None)
        }
    }

    /// Sum of durations for records starting inside `range`.
    pub fn total_usage_between(&self, range: &TimeRange) -> Result<i64> {
        let total: i64 = self.conn.query_row(
            r#"
            SELECT COALESCE(SUM(duration), 0)
            FROM usage_records
            WHERE start_time >= ?1 AND start_time < ?2
            "#,
            params![range.start, range.end],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    pub fn usage_by_app_between(&self, range: &TimeRange) -> Result<BTreeMap<String, i64>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT app_name, SUM(duration)
            FROM usage_records
            WHERE start_time >= ?1 AND start_time < ?2
            GROUP BY app_name
            "#,
        )?;
        let rows = stmt.query_map(params![range.start, range.end], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;
        let mut totals = BTreeMap::new();
        for row in rows {
            let (app_name, total) = row?;
            totals.insert(app_name, total);
        }
        Ok(totals)
    }

    pub fn count_usage_records(&self) -> Result<u64> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM usage_records", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    pub fn delete_usage_record(&self, id: i64) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM usage_records WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn clear_usage_records(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM usage_records", [])?)
    }
}

pub(crate) fn insert_usage_record(conn: &Connection, record: &UsageRecord) -> Result<i64> {
    if !record.is_consistent() {
        return Err(DbError::InvalidRecord(format!(
            "usage record for {} has start {} end {} duration {}",
            record.app_name, record.start_time, record.end_time, record.duration
        )));
    }
    conn.execute(
        r#"
        INSERT OR REPLACE INTO usage_records (
          id, app_name, start_time, end_time, duration, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        params![
            assigned_id(record.id),
            record.app_name,
            record.start_time,
            record.end_time,
            record.duration,
            record.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

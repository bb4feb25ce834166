use focus_core::SearchHistoryEntry;
use rusqlite::params;

use crate::Db;
use crate::error::Result;
use crate::helpers::{assigned_id, row_to_search_history};

/// How many entries the recent-history view returns.
pub const RECENT_SEARCH_LIMIT: u32 = 10;

impl Db {
    pub fn insert_search_history(&self, entry: &SearchHistoryEntry) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO search_history (id, keyword, platform, search_time, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                assigned_id(entry.id),
                entry.keyword,
                entry.platform,
                entry.search_time,
                entry.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Newest entries first, capped at `limit`.
    pub fn recent_search_history(&self, limit: u32) -> Result<Vec<SearchHistoryEntry>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, keyword, platform, search_time, created_at
            FROM search_history
            ORDER BY search_time DESC, id DESC
            LIMIT ?1
            "#,
        )?;
        let rows = stmt.query_map(params![limit], row_to_search_history)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub fn delete_search_history(&self, id: i64) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM search_history WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn clear_search_history(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM search_history", [])?)
    }
}

use focus_core::Platform;
use rusqlite::{OptionalExtension, params};

use crate::Db;
use crate::error::Result;
use crate::helpers::row_to_platform;

impl Db {
    /// User-added platforms in insertion order.
    pub fn list_platforms(&self) -> Result<Vec<Platform>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, package_name, icon, is_enabled, search_url_template
            FROM platforms
            ORDER BY rowid ASC
            "#,
        )?;
        let rows = stmt
            .query_map([], row_to_platform)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn get_platform(&self, id: &str) -> Result<Option<Platform>> {
        Ok(self
            .conn
            .query_row(
                r#"
                SELECT id, name, package_name, icon, is_enabled, search_url_template
                FROM platforms
                WHERE id = ?1
                "#,
                params![id],
                row_to_platform,
            )
            .optional()?)
    }

    pub fn insert_platform(&self, platform: &Platform) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO platforms (
              id, name, package_name, icon, is_enabled, search_url_template
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                platform.id,
                platform.name,
                platform.package_name,
                platform.icon,
                platform.is_enabled,
                platform.search_url_template,
            ],
        )?;
        Ok(())
    }

    /// Returns `false` when no stored row has this id.
    pub fn update_platform(&self, platform: &Platform) -> Result<bool> {
        let updated = self.conn.execute(
            r#"
            UPDATE platforms
            SET name = ?2, package_name = ?3, icon = ?4, is_enabled = ?5,
                search_url_template = ?6
            WHERE id = ?1
            "#,
            params![
                platform.id,
                platform.name,
                platform.package_name,
                platform.icon,
                platform.is_enabled,
                platform.search_url_template,
            ],
        )?;
        Ok(updated > 0)
    }

    pub fn delete_platform(&self, id: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM platforms WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn set_platform_enabled(&self, id: &str, enabled: bool) -> Result<bool> {
        let updated = self.conn.execute(
            "UPDATE platforms SET is_enabled = ?2 WHERE id = ?1",
            params![id, enabled],
        )?;
        Ok(updated > 0)
    }
}

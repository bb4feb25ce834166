mod app_state;
mod cursor;
mod error;
mod helpers;
mod migrations;
mod platforms;
mod reminders;
mod search_history;
mod settings;
mod types;
mod usage_records;

use std::path::Path;

use rusqlite::Connection;

pub use error::{DbError, Result};
pub use migrations::MIGRATIONS;
pub use search_history::RECENT_SEARCH_LIMIT;
pub use types::UsageCursor;

/// Handle to the on-device store. Cheap to open; services open one per call.
pub struct Db {
    conn: Connection,
}

impl Db {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "temp_store", "MEMORY")?;
        conn.pragma_update(None, "busy_timeout", 5_000)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }
}

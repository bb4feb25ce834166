#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, DbError>;

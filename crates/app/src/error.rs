use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("db error: {0}")]
    Db(#[from] focus_db::DbError),
    #[error("usage error: {0}")]
    Usage(#[from] focus_usage::UsageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let (status, code) = match err {
            AppError::InvalidInput(_) => (400, Some("invalid_input".to_string())),
            AppError::NotFound(_) => (404, Some("not_found".to_string())),
            AppError::Db(_)
            | AppError::Usage(_)
            | AppError::Io(_)
            | AppError::Message(_) => (500, None),
        };
        Self {
            status,
            message: err.to_string(),
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_kinds_to_status() {
        let invalid: ApiError = AppError::InvalidInput("bad interval".to_string()).into();
        assert_eq!(invalid.status, 400);
        assert_eq!(invalid.code.as_deref(), Some("invalid_input"));

        let missing: ApiError = AppError::NotFound("platform not found".to_string()).into();
        assert_eq!(missing.status, 404);
        assert_eq!(missing.message, "platform not found");

        let other: ApiError = AppError::Message("boom".to_string()).into();
        assert_eq!(other.status, 500);
        assert!(other.code.is_none());
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use focus_app::{ApiError, AppError};

/// JSON error body plus the status it is sent with.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ApiError,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>, code: Option<&str>) -> Self {
        let body = ApiError {
            status: status.as_u16(),
            message: message.into(),
            code: code.map(str::to_string),
        };
        Self { status, body }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, None)
    }

    pub fn bad_origin(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, Some("invalid_origin"))
    }

    pub fn forbidden_origin() -> Self {
        Self::new(StatusCode::FORBIDDEN, "invalid origin", Some("invalid_origin"))
    }

    pub fn csrf_invalid() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "missing or invalid CSRF token",
            Some("csrf_invalid"),
        )
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, Some("not_found"))
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        let body = ApiError::from(err);
        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), message = %body.message, "request failed");
        }
        Self { status, body }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

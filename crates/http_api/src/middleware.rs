use axum::{
    body::Body,
    extract::State,
    http::{Request, header::ORIGIN},
    middleware::Next,
    response::Response,
};

use crate::{errors::HttpError, state::HttpState};

pub const CSRF_HEADER: &str = "x-focus-token";

const LOOPBACK_HOSTS: [&str; 3] = ["127.0.0.1", "localhost", "[::1]"];

/// Rejects browser requests from non-loopback origins and any request that
/// lacks the per-process token.
pub async fn require_csrf(
    State(state): State<HttpState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, HttpError> {
    if let Some(origin) = req.headers().get(ORIGIN) {
        let origin = origin
            .to_str()
            .map_err(|_| HttpError::bad_origin("invalid Origin header"))?;
        if !is_loopback_origin(origin) {
            tracing::warn!(origin, path = %req.uri().path(), "rejected foreign origin");
            return Err(HttpError::forbidden_origin());
        }
    }

    let token = req
        .headers()
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok());
    if token != Some(state.csrf_token.as_str()) {
        tracing::debug!(path = %req.uri().path(), "rejected request without valid token");
        return Err(HttpError::csrf_invalid());
    }

    Ok(next.run(req).await)
}

fn is_loopback_origin(origin: &str) -> bool {
    let Some(rest) = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
    else {
        return false;
    };
    let host = match rest.rfind(':') {
        Some(index) if !rest[index..].contains(']') => &rest[..index],
        _ => rest,
    };
    LOOPBACK_HOSTS.contains(&host)
}

#[cfg(test)]
mod tests {
    use super::is_loopback_origin;

    #[test]
    fn accepts_only_loopback_origins() {
        assert!(is_loopback_origin("http://127.0.0.1:3846"));
        assert!(is_loopback_origin("http://localhost:5173"));
        assert!(is_loopback_origin("https://[::1]:8443"));
        assert!(is_loopback_origin("http://localhost"));
        assert!(!is_loopback_origin("http://127.0.0.1.example.com"));
        assert!(!is_loopback_origin("https://focus.example.com"));
        assert!(!is_loopback_origin("file://localhost"));
    }
}

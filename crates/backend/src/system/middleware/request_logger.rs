use axum::body::{Body, HttpBody};
use axum::http::{header, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use std::fmt;
use std::time::Duration;

use crate::shared::format::format_number;

/// One console line per request
struct RequestLine<'a> {
    method: &'a Method,
    path: &'a str,
    status: StatusCode,
    elapsed: Duration,
    /// Absent for streamed bodies
    bytes: Option<u64>,
}

impl fmt::Display for RequestLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self
            .bytes
            .map(format_number)
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{:>5}ms | {:>10} | {} {:>6} {}",
            self.elapsed.as_millis(),
            size,
            self.status.as_u16(),
            self.method.as_str(),
            self.path
        )
    }
}

/// Colored console line plus a structured tracing event for every request.
/// Order submissions are logged at info, everything else at debug.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let bytes = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .or_else(|| response.body().size_hint().exact());
    let line = RequestLine {
        method: &method,
        path: &path,
        status: response.status(),
        elapsed: start.elapsed(),
        bytes,
    };

    // cyan ok, yellow client/server error
    let color = if line.status.is_success() { "36" } else { "33" };
    println!("\x1b[{}m{}\x1b[0m | {}", color, Utc::now().format("%H:%M:%S"), line);

    if method == Method::POST && path.starts_with("/api/orders") {
        tracing::info!(status = line.status.as_u16(), "order submission {}", line);
    } else {
        tracing::debug!(status = line.status.as_u16(), "{}", line);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_line_layout() {
        let line = RequestLine {
            method: &Method::GET,
            path: "/api/menu/catalog",
            status: StatusCode::OK,
            elapsed: Duration::from_millis(12),
            bytes: Some(4_096),
        };
        assert_eq!(
            line.to_string(),
            "   12ms |      4,096 | 200    GET /api/menu/catalog"
        );
    }

    #[test]
    fn test_unknown_size_shows_dash() {
        let line = RequestLine {
            method: &Method::POST,
            path: "/api/orders",
            status: StatusCode::UNPROCESSABLE_ENTITY,
            elapsed: Duration::from_millis(3),
            bytes: None,
        };
        assert!(line.to_string().contains("|          - | 422   POST /api/orders"));
    }
}

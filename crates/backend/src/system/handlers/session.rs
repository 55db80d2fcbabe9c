use axum::http::HeaderMap;
use axum::Json;
use contracts::system::session::SessionUser;

use crate::shared::config;

/// Header set by the identity proxy in front of the service
pub const DISPLAY_NAME_HEADER: &str = "x-display-name";

/// GET /api/session/me
pub async fn current_user(headers: HeaderMap) -> Json<SessionUser> {
    Json(resolve_user(&headers, &config::guest_name()))
}

fn resolve_user(headers: &HeaderMap, guest_name: &str) -> SessionUser {
    let forwarded = headers
        .get(DISPLAY_NAME_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    match forwarded {
        Some(name) => SessionUser::new(name),
        None => SessionUser::new(guest_name),
    }
}

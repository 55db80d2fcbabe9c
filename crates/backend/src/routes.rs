use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SESSION
        // ========================================
        .route(
            "/api/session/me",
            get(system::handlers::session::current_user),
        )
        // ========================================
        // MENU
        // ========================================
        .route(
            "/api/menu/catalog",
            get(handlers::a002_menu_item::get_catalog),
        )
        // ========================================
        // ORDERS
        // ========================================
        .route(
            "/api/orders",
            get(handlers::a003_customer_order::list_all)
                .post(handlers::a003_customer_order::submit),
        )
}

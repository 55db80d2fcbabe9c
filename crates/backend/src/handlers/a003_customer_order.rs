use axum::Json;
use contracts::domain::a003_customer_order::{OrderPayload, OrderReceipt, StoredOrder};

use crate::domain::a003_customer_order;
use crate::shared::data::db::get_connection;

/// POST /api/orders
pub async fn submit(
    Json(payload): Json<OrderPayload>,
) -> Result<Json<OrderReceipt>, axum::http::StatusCode> {
    match a003_customer_order::service::store(get_connection(), payload).await {
        Ok(receipt) => Ok(Json(receipt)),
        Err(e) => {
            tracing::error!("Failed to store order: {:#}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/orders
pub async fn list_all() -> Result<Json<Vec<StoredOrder>>, axum::http::StatusCode> {
    match a003_customer_order::service::list_all(get_connection()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list orders: {:#}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

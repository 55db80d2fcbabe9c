use super::repository;
use chrono::Utc;
use contracts::domain::a003_customer_order::{OrderPayload, OrderReceipt, StoredOrder};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// Keep a confirmed order as received; no validation beyond deserialization
pub async fn store(conn: &DatabaseConnection, payload: OrderPayload) -> anyhow::Result<OrderReceipt> {
    let order = StoredOrder {
        id: Uuid::new_v4().to_string(),
        received_at: Utc::now(),
        payload,
    };
    repository::insert(conn, &order).await?;

    tracing::info!(
        "order {} stored as {} ({}, {} items, total {})",
        order.payload.order_ref,
        order.id,
        order.payload.order_type,
        order.payload.item_count(),
        order.payload.total
    );

    Ok(OrderReceipt {
        id: order.id,
        received_at: order.received_at,
    })
}

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<StoredOrder>> {
    repository::list_all(conn).await
}

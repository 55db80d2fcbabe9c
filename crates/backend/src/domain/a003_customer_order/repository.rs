use contracts::domain::a003_customer_order::{OrderPayload, StoredOrder};
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub order_ref: String,
    pub order_type: String,
    pub customer_name: String,
    pub total: String,
    /// Full payload as received
    pub payload_json: String,
    pub received_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for StoredOrder {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let payload: OrderPayload = serde_json::from_str(&m.payload_json)?;
        Ok(StoredOrder {
            id: m.id,
            received_at: m.received_at,
            payload,
        })
    }
}

pub async fn insert(conn: &DatabaseConnection, order: &StoredOrder) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(order.id.clone()),
        order_ref: Set(order.payload.order_ref.to_string()),
        order_type: Set(order.payload.order_type.code().to_string()),
        customer_name: Set(order.payload.customer_name.clone()),
        total: Set(order.payload.total.to_string()),
        payload_json: Set(serde_json::to_string(&order.payload)?),
        received_at: Set(order.received_at),
    };
    active.insert(conn).await?;
    Ok(())
}

/// Newest first
pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<StoredOrder>> {
    Entity::find()
        .order_by_desc(Column::ReceivedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(StoredOrder::try_from)
        .collect()
}

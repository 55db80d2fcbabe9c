use contracts::domain::a002_menu_item::{MenuItemRecord, RawPrice};
use contracts::enums::MenuItemStatus;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub image: String,
    /// Decimal text, kept exact
    pub price: String,
    pub description: String,
    pub category_id: i64,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MenuItemRecord {
    fn from(m: Model) -> Self {
        MenuItemRecord {
            id: m.id,
            name: m.name,
            image: m.image,
            price: RawPrice::Text(m.price),
            description: m.description,
            category_id: m.category_id,
            status: MenuItemStatus::from_code(&m.status),
        }
    }
}

/// Items the kitchen currently serves
pub async fn list_available(conn: &DatabaseConnection) -> anyhow::Result<Vec<MenuItemRecord>> {
    let items = Entity::find()
        .filter(Column::Status.eq(MenuItemStatus::Available.as_str()))
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert_many(conn: &DatabaseConnection, records: &[MenuItemRecord]) -> anyhow::Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    let models = records.iter().map(|r| ActiveModel {
        id: Set(r.id),
        name: Set(r.name.clone()),
        image: Set(r.image.clone()),
        price: Set(match &r.price {
            RawPrice::Text(s) => s.clone(),
            RawPrice::Number(v) => v.to_string(),
        }),
        description: Set(r.description.clone()),
        category_id: Set(r.category_id),
        status: Set(r.status.as_str().to_string()),
    });
    Entity::insert_many(models).exec(conn).await?;
    Ok(())
}

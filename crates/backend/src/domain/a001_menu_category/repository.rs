use contracts::domain::a001_menu_category::{MenuCategory, MenuCategoryId};
use contracts::domain::common::AggregateId;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MenuCategory {
    fn from(m: Model) -> Self {
        MenuCategory {
            id: MenuCategoryId::new(m.id),
            name: m.name,
        }
    }
}

/// Categories in display order
pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<MenuCategory>> {
    let items = Entity::find()
        .order_by_asc(Column::SortOrder)
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn count(conn: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn).await?)
}

/// Insert categories; their position in the slice becomes the sort order
pub async fn insert_many(conn: &DatabaseConnection, categories: &[MenuCategory]) -> anyhow::Result<()> {
    if categories.is_empty() {
        return Ok(());
    }
    let models = categories.iter().enumerate().map(|(i, c)| ActiveModel {
        id: Set(c.id.value()),
        name: Set(c.name.clone()),
        sort_order: Set(i as i32),
    });
    Entity::insert_many(models).exec(conn).await?;
    Ok(())
}

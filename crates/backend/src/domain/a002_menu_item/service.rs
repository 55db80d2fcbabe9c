use super::repository;
use crate::domain::a001_menu_category;
use contracts::usecases::u501_order_session::{CatalogIndex, CatalogSnapshot};
use sea_orm::DatabaseConnection;

/// Catalog snapshot for the ordering page: every category, available items only.
///
/// Fails when the snapshot would not load as a catalog index.
pub async fn load_catalog(conn: &DatabaseConnection) -> anyhow::Result<CatalogSnapshot> {
    let categories = a001_menu_category::repository::list_all(conn).await?;
    let items = repository::list_available(conn).await?;
    let snapshot = CatalogSnapshot { categories, items };

    CatalogIndex::from_snapshot(snapshot.clone())
        .map_err(|e| anyhow::anyhow!("menu data is inconsistent: {}", e))?;

    tracing::debug!(
        "catalog snapshot: {} categories, {} items",
        snapshot.categories.len(),
        snapshot.items.len()
    );
    Ok(snapshot)
}

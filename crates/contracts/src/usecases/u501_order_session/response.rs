use crate::domain::a001_menu_category::MenuCategory;
use crate::domain::a002_menu_item::MenuItemRecord;
use serde::{Deserialize, Serialize};

/// Catalog snapshot as served by the catalog provider (GET /api/menu/catalog)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub categories: Vec<MenuCategory>,
    pub items: Vec<MenuItemRecord>,
}

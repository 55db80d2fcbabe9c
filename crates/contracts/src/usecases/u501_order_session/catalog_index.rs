use super::response::CatalogSnapshot;
use crate::domain::a001_menu_category::{MenuCategory, MenuCategoryId};
use crate::domain::a002_menu_item::{MenuItem, MenuItemDetails, MenuItemId, MenuItemRecord};
use crate::domain::common::{AggregateId, OrderError, OrderResult, ReferenceKind};
use std::collections::HashMap;

/// Immutable snapshot of categories and available items for one session
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    categories: Vec<MenuCategory>,
    items: Vec<MenuItem>,
    category_positions: HashMap<MenuCategoryId, usize>,
    item_positions: HashMap<MenuItemId, usize>,
}

impl CatalogIndex {
    /// Build the index from provider data.
    ///
    /// Unavailable items are skipped. Any available item pointing at an
    /// unknown category, a duplicate id or a bad price rejects the whole
    /// snapshot.
    pub fn load(categories: Vec<MenuCategory>, records: Vec<MenuItemRecord>) -> OrderResult<Self> {
        let mut category_positions = HashMap::with_capacity(categories.len());
        for (pos, category) in categories.iter().enumerate() {
            if category_positions.insert(category.id, pos).is_some() {
                return Err(OrderError::DuplicateId {
                    kind: ReferenceKind::Category,
                    id: category.id.as_string(),
                });
            }
        }

        let mut items = Vec::with_capacity(records.len());
        let mut item_positions = HashMap::with_capacity(records.len());
        let mut skipped = 0usize;
        for record in records {
            if !record.is_available() {
                skipped += 1;
                continue;
            }
            let item = record.into_item()?;
            if !category_positions.contains_key(&item.category_id) {
                log::warn!(
                    "menu item {} references unknown category {}",
                    item.id,
                    item.category_id
                );
                return Err(OrderError::unknown_category(item.category_id));
            }
            if item_positions.insert(item.id, items.len()).is_some() {
                return Err(OrderError::DuplicateId {
                    kind: ReferenceKind::Item,
                    id: item.id.as_string(),
                });
            }
            items.push(item);
        }

        log::debug!(
            "catalog loaded: {} categories, {} items ({} unavailable skipped)",
            categories.len(),
            items.len(),
            skipped
        );

        Ok(Self {
            categories,
            items,
            category_positions,
            item_positions,
        })
    }

    pub fn from_snapshot(snapshot: CatalogSnapshot) -> OrderResult<Self> {
        Self::load(snapshot.categories, snapshot.items)
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn first_category(&self) -> Option<&MenuCategory> {
        self.categories.first()
    }

    pub fn category(&self, id: MenuCategoryId) -> Option<&MenuCategory> {
        self.category_positions.get(&id).map(|&pos| &self.categories[pos])
    }

    /// All items in catalog order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.item_positions.get(&id).map(|&pos| &self.items[pos])
    }

    pub fn contains_item(&self, id: MenuItemId) -> bool {
        self.item_positions.contains_key(&id)
    }

    pub fn contains_category(&self, id: MenuCategoryId) -> bool {
        self.category_positions.contains_key(&id)
    }

    /// Items of one category, catalog order
    pub fn items_by_category(&self, id: MenuCategoryId) -> Vec<&MenuItem> {
        self.items.iter().filter(|i| i.category_id == id).collect()
    }

    pub fn item_details(&self, id: MenuItemId) -> OrderResult<MenuItemDetails> {
        self.item(id)
            .map(MenuItem::details)
            .ok_or_else(|| OrderError::unknown_item(id))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

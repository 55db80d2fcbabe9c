use super::CatalogIndex;
use crate::domain::a001_menu_category::MenuCategoryId;
use crate::domain::a002_menu_item::MenuItem;
use crate::domain::common::{OrderError, OrderResult};

/// Header text before any category has been chosen
pub const DEFAULT_HEADER: &str = "Menu";

/// Which category's items are on screen.
///
/// A pure view projection: it never touches quantities, so items hidden by
/// the filter keep counting toward totals and badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    active: Option<MenuCategoryId>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_category(
        &mut self,
        catalog: &CatalogIndex,
        category_id: MenuCategoryId,
    ) -> OrderResult<()> {
        if !catalog.contains_category(category_id) {
            return Err(OrderError::unknown_category(category_id));
        }
        self.active = Some(category_id);
        Ok(())
    }

    pub fn active_category(&self) -> Option<MenuCategoryId> {
        self.active
    }

    pub fn is_active(&self, category_id: MenuCategoryId) -> bool {
        self.active == Some(category_id)
    }

    /// Items of the active category in catalog order; empty when none is active
    pub fn visible_items<'a>(&self, catalog: &'a CatalogIndex) -> Vec<&'a MenuItem> {
        match self.active {
            Some(id) => catalog.items_by_category(id),
            None => Vec::new(),
        }
    }

    /// Page header: the active category's name
    pub fn header_label<'a>(&self, catalog: &'a CatalogIndex) -> &'a str {
        self.active
            .and_then(|id| catalog.category(id))
            .map(|c| c.name.as_str())
            .unwrap_or(DEFAULT_HEADER)
    }
}

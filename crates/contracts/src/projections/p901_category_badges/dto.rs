use crate::domain::a001_menu_category::MenuCategoryId;
use serde::{Deserialize, Serialize};

/// Notification badge of a category button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBadge {
    pub category_id: MenuCategoryId,
    pub count: u64,
}

impl CategoryBadge {
    pub fn is_visible(&self) -> bool {
        self.count > 0
    }

    /// "has-items" highlight of the button
    pub fn has_items(&self) -> bool {
        self.count > 0
    }

    /// Badge text; empty while hidden
    pub fn label(&self) -> String {
        if self.count > 0 {
            self.count.to_string()
        } else {
            String::new()
        }
    }
}

/// Badges of all categories, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBadges {
    pub badges: Vec<CategoryBadge>,
}

impl CategoryBadges {
    pub fn get(&self, category_id: MenuCategoryId) -> Option<&CategoryBadge> {
        self.badges.iter().find(|b| b.category_id == category_id)
    }

    /// Count for a category, 0 for unknown ids
    pub fn count(&self, category_id: MenuCategoryId) -> u64 {
        self.get(category_id).map(|b| b.count).unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.badges.iter().map(|b| b.count).sum()
    }
}

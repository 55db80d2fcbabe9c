//! Per-category quantity badges

pub mod dto;

pub use dto::{CategoryBadge, CategoryBadges};

use crate::domain::a001_menu_category::MenuCategoryId;
use crate::usecases::u501_order_session::{CatalogIndex, QuantityLedger};
use std::collections::HashMap;

/// Sum ledger quantities per category.
///
/// Independent of the active category: hidden items still count.
pub fn recompute(ledger: &QuantityLedger, catalog: &CatalogIndex) -> CategoryBadges {
    let mut counts: HashMap<MenuCategoryId, u64> = HashMap::new();
    for item in catalog.items() {
        *counts.entry(item.category_id).or_insert(0) += u64::from(ledger.quantity(item.id));
    }

    let badges = catalog
        .categories()
        .iter()
        .map(|c| CategoryBadge {
            category_id: c.id,
            count: counts.get(&c.id).copied().unwrap_or(0),
        })
        .collect();

    CategoryBadges { badges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_menu_item::MenuItemId;
    use crate::usecases::u501_order_session::fixtures::sample_catalog;

    #[test]
    fn test_badges_start_hidden() {
        let catalog = sample_catalog();
        let badges = recompute(&QuantityLedger::new(), &catalog);
        assert_eq!(badges.badges.len(), 3);
        for badge in &badges.badges {
            assert_eq!(badge.count, 0);
            assert!(!badge.is_visible());
            assert_eq!(badge.label(), "");
        }
    }

    #[test]
    fn test_badges_sum_per_category() {
        let catalog = sample_catalog();
        let mut ledger = QuantityLedger::new();
        ledger.increment(&catalog, MenuItemId::new(1)).unwrap();
        ledger.increment(&catalog, MenuItemId::new(1)).unwrap();
        ledger.increment(&catalog, MenuItemId::new(2)).unwrap();
        ledger.increment(&catalog, MenuItemId::new(3)).unwrap();

        let badges = recompute(&ledger, &catalog);
        assert_eq!(badges.count(MenuCategoryId::new(10)), 3);
        assert_eq!(badges.count(MenuCategoryId::new(20)), 1);
        assert_eq!(badges.count(MenuCategoryId::new(30)), 0);
        assert_eq!(badges.count(MenuCategoryId::new(99)), 0);
        assert_eq!(badges.get(MenuCategoryId::new(10)).unwrap().label(), "3");
        assert!(badges.get(MenuCategoryId::new(20)).unwrap().has_items());
        assert_eq!(badges.total(), 4);
    }
}

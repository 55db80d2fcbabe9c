use super::CatalogIndex;
use crate::domain::a002_menu_item::MenuItemId;
use crate::domain::common::{OrderError, OrderResult};
use std::collections::BTreeMap;

/// Cart quantities per menu item.
///
/// Only positive quantities are stored; a missing entry means 0. Quantities
/// have no product ceiling and saturate at `u32::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantityLedger {
    quantities: BTreeMap<MenuItemId, u32>,
}

impl QuantityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit; returns the new quantity
    pub fn increment(&mut self, catalog: &CatalogIndex, item_id: MenuItemId) -> OrderResult<u32> {
        Self::ensure_known(catalog, item_id)?;
        let quantity = self.quantities.entry(item_id).or_insert(0);
        *quantity = quantity.saturating_add(1);
        Ok(*quantity)
    }

    /// Remove one unit; at 0 this is a no-op, not an error
    pub fn decrement(&mut self, catalog: &CatalogIndex, item_id: MenuItemId) -> OrderResult<u32> {
        Self::ensure_known(catalog, item_id)?;
        let Some(quantity) = self.quantities.get_mut(&item_id) else {
            return Ok(0);
        };
        *quantity -= 1;
        let remaining = *quantity;
        if remaining == 0 {
            self.quantities.remove(&item_id);
        }
        Ok(remaining)
    }

    /// Every quantity back to 0
    pub fn reset(&mut self) {
        self.quantities.clear();
    }

    pub fn quantity(&self, item_id: MenuItemId) -> u32 {
        self.quantities.get(&item_id).copied().unwrap_or(0)
    }

    /// Card highlight: the item is in the cart
    pub fn is_selected(&self, item_id: MenuItemId) -> bool {
        self.quantity(item_id) > 0
    }

    pub fn total_quantity(&self) -> u64 {
        self.quantities.values().map(|&q| u64::from(q)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Items with a positive quantity, ordered by id
    pub fn iter(&self) -> impl Iterator<Item = (MenuItemId, u32)> + '_ {
        self.quantities.iter().map(|(&id, &q)| (id, q))
    }

    fn ensure_known(catalog: &CatalogIndex, item_id: MenuItemId) -> OrderResult<()> {
        if catalog.contains_item(item_id) {
            Ok(())
        } else {
            Err(OrderError::unknown_item(item_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_order_session::fixtures::sample_catalog;

    #[test]
    fn test_increment_and_decrement() {
        let catalog = sample_catalog();
        let mut ledger = QuantityLedger::new();
        let id = MenuItemId::new(1);

        assert_eq!(ledger.increment(&catalog, id), Ok(1));
        assert_eq!(ledger.increment(&catalog, id), Ok(2));
        assert!(ledger.is_selected(id));
        assert_eq!(ledger.decrement(&catalog, id), Ok(1));
        assert_eq!(ledger.decrement(&catalog, id), Ok(0));
        assert!(!ledger.is_selected(id));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let catalog = sample_catalog();
        let mut ledger = QuantityLedger::new();
        let id = MenuItemId::new(2);

        assert_eq!(ledger.decrement(&catalog, id), Ok(0));
        assert_eq!(ledger.quantity(id), 0);
        assert_eq!(ledger, QuantityLedger::new());
    }

    #[test]
    fn test_unknown_item_is_rejected_without_change() {
        let catalog = sample_catalog();
        let mut ledger = QuantityLedger::new();
        ledger.increment(&catalog, MenuItemId::new(1)).unwrap();
        let before = ledger.clone();

        assert_eq!(
            ledger.increment(&catalog, MenuItemId::new(404)),
            Err(OrderError::unknown_item(404))
        );
        assert_eq!(
            ledger.decrement(&catalog, MenuItemId::new(404)),
            Err(OrderError::unknown_item(404))
        );
        // unavailable items are not in the catalog either
        assert!(ledger.increment(&catalog, MenuItemId::new(4)).is_err());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let catalog = sample_catalog();
        let mut ledger = QuantityLedger::new();
        ledger.increment(&catalog, MenuItemId::new(1)).unwrap();
        ledger.increment(&catalog, MenuItemId::new(3)).unwrap();
        ledger.increment(&catalog, MenuItemId::new(3)).unwrap();
        assert_eq!(ledger.total_quantity(), 3);

        ledger.reset();
        assert_eq!(ledger.total_quantity(), 0);
        assert_eq!(ledger.quantity(MenuItemId::new(3)), 0);
        assert_eq!(ledger.iter().count(), 0);
    }

    #[test]
    fn test_increment_saturates_at_u32_max() {
        let catalog = sample_catalog();
        let id = MenuItemId::new(1);
        let mut ledger = QuantityLedger::new();
        ledger.quantities.insert(id, u32::MAX - 1);

        assert_eq!(ledger.increment(&catalog, id), Ok(u32::MAX));
        assert_eq!(ledger.increment(&catalog, id), Ok(u32::MAX));
        assert_eq!(ledger.quantity(id), u32::MAX);
        assert_eq!(ledger.total_quantity(), u64::from(u32::MAX));

        assert_eq!(ledger.decrement(&catalog, id), Ok(u32::MAX - 1));
    }
}

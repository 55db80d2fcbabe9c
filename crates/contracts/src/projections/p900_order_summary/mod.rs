//! Order summary projection.
//!
//! Rebuilt from scratch after every ledger mutation; catalogs are small, so a
//! linear pass is all it takes.

pub mod dto;

pub use dto::{OrderSummary, OrderSummaryLine};

use crate::usecases::u501_order_session::{CatalogIndex, QuantityLedger};
use rust_decimal::Decimal;

/// Derive summary lines, total and the empty flag from the ledger.
///
/// Prices are exact 2-place decimals, so every subtotal and the running total
/// are exact as well; the total is always the sum of the displayed subtotals.
pub fn recompute(ledger: &QuantityLedger, catalog: &CatalogIndex) -> OrderSummary {
    let mut lines = Vec::new();
    let mut total = Decimal::ZERO;

    for item in catalog.items() {
        let quantity = ledger.quantity(item.id);
        if quantity == 0 {
            continue;
        }
        let subtotal = item.price * Decimal::from(quantity);
        total += subtotal;
        lines.push(OrderSummaryLine {
            item_id: item.id,
            item_name: item.name.clone(),
            unit_price: item.price,
            quantity,
            subtotal,
        });
    }

    let is_empty = lines.is_empty();
    OrderSummary {
        lines,
        total,
        is_empty,
    }
}

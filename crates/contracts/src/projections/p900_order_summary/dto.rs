use crate::domain::a002_menu_item::MenuItemId;
use crate::shared::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the order summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryLine {
    pub item_id: MenuItemId,
    pub item_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
}

impl OrderSummaryLine {
    pub fn unit_price_label(&self) -> String {
        money::format_money(self.unit_price)
    }

    pub fn subtotal_label(&self) -> String {
        money::format_money(self.subtotal)
    }
}

/// Derived order summary: lines in catalog order plus the grand total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub lines: Vec<OrderSummaryLine>,
    pub total: Decimal,
    pub is_empty: bool,
}

impl OrderSummary {
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: Decimal::ZERO,
            is_empty: true,
        }
    }

    pub fn total_label(&self) -> String {
        money::format_money(self.total)
    }

    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// The confirm button is shown only for a non-empty cart
    pub fn confirm_enabled(&self) -> bool {
        !self.is_empty
    }
}

impl Default for OrderSummary {
    fn default() -> Self {
        Self::empty()
    }
}

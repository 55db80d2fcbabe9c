use crate::enums::OrderType;
use crate::projections::p900_order_summary::OrderSummaryLine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ORDER_CONFIRMED_MESSAGE: &str = "Order confirmed! Thank you for your purchase.";

/// Confirmed order as handed to the order sink.
///
/// `address` is only present for delivery, `cash_amount` only for dine-in
/// and takeout. `lines` is the summary captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub order_ref: Uuid,
    pub order_type: OrderType,
    pub customer_name: String,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub cash_amount: Option<Decimal>,
    pub lines: Vec<OrderSummaryLine>,
    pub total: Decimal,
    pub placed_by: String,
}

impl OrderPayload {
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// Answer of the order endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub id: String,
    pub received_at: chrono::DateTime<chrono::Utc>,
}

/// Order as kept by the backend sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredOrder {
    pub id: String,
    pub received_at: chrono::DateTime<chrono::Utc>,
    pub payload: OrderPayload,
}

/// What the customer is told after a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAcknowledgement {
    pub order_ref: Uuid,
    pub message: String,
    pub total: Decimal,
}

use crate::domain::a003_customer_order::OrderPayload;
use std::cell::RefCell;

/// Receiver of confirmed orders (network call, persistence, ...).
///
/// Called synchronously from the submit handler. An error keeps the cart
/// and the open form untouched so the customer can retry.
pub trait OrderSink {
    fn submit(&self, payload: &OrderPayload) -> anyhow::Result<()>;
}

/// Only logs the order; nothing leaves the page
#[derive(Debug, Clone, Copy, Default)]
pub struct AcknowledgeOnlySink;

impl OrderSink for AcknowledgeOnlySink {
    fn submit(&self, payload: &OrderPayload) -> anyhow::Result<()> {
        log::info!(
            "order {} acknowledged locally: {} x{} items, total {}",
            payload.order_ref,
            payload.order_type,
            payload.item_count(),
            payload.total
        );
        Ok(())
    }
}

/// Keeps every payload in memory; can be told to refuse them
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: RefCell<Vec<OrderPayload>>,
    refuse_with: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing(reason: impl Into<String>) -> Self {
        Self {
            received: RefCell::new(Vec::new()),
            refuse_with: Some(reason.into()),
        }
    }

    pub fn received(&self) -> Vec<OrderPayload> {
        self.received.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.received.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.received.borrow().is_empty()
    }
}

impl OrderSink for RecordingSink {
    fn submit(&self, payload: &OrderPayload) -> anyhow::Result<()> {
        if let Some(reason) = &self.refuse_with {
            anyhow::bail!("{}", reason);
        }
        self.received.borrow_mut().push(payload.clone());
        Ok(())
    }
}

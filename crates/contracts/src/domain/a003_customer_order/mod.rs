pub mod aggregate;

pub use aggregate::{
    OrderAcknowledgement, OrderPayload, OrderReceipt, StoredOrder, ORDER_CONFIRMED_MESSAGE,
};

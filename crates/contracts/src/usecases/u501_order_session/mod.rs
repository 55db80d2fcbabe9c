//! Client-side ordering session: catalog browsing, cart quantities and the
//! confirmation dialog.
//!
//! `OrderSession` owns every piece of mutable state. The components below
//! never reach for state they were not handed explicitly.

pub mod catalog_index;
pub mod category_filter;
pub mod confirmation;
pub mod order_form;
pub mod order_sink;
pub mod quantity_ledger;
pub mod response;
pub mod session;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
mod tests;

pub use catalog_index::CatalogIndex;
pub use category_filter::CategoryFilter;
pub use confirmation::ConfirmationFlow;
pub use order_form::{FieldPolicy, FormPolicy, OrderFormController, OrderFormValues, ValidatedOrderForm};
pub use order_sink::{AcknowledgeOnlySink, OrderSink, RecordingSink};
pub use quantity_ledger::QuantityLedger;
pub use response::CatalogSnapshot;
pub use session::OrderSession;

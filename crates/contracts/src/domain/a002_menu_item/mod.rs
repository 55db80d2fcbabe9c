pub mod aggregate;

pub use aggregate::{MenuItem, MenuItemDetails, MenuItemId, MenuItemRecord, RawPrice};

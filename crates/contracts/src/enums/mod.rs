pub mod confirmation_state;
pub mod form_field;
pub mod menu_item_status;
pub mod order_type;

pub use confirmation_state::ConfirmationState;
pub use form_field::FormField;
pub use menu_item_status::MenuItemStatus;
pub use order_type::OrderType;

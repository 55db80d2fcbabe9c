pub mod category_list;
pub mod confirm_form;
pub mod item_details;
pub mod item_grid;
pub mod order_summary;

pub use category_list::CategoryList;
pub use confirm_form::ConfirmForm;
pub use item_details::ItemDetails;
pub use item_grid::ItemGrid;
pub use order_summary::OrderSummaryPanel;

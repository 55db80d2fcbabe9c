pub mod a001_menu_category;
pub mod a002_menu_item;
pub mod a003_customer_order;
pub mod common;

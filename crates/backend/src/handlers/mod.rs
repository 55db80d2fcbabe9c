pub mod a002_menu_item;
pub mod a003_customer_order;

pub mod p900_order_summary;
pub mod p901_category_badges;

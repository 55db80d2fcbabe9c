use super::CatalogIndex;
use crate::domain::a001_menu_category::MenuCategory;
use crate::domain::a002_menu_item::{MenuItemRecord, RawPrice};
use crate::enums::MenuItemStatus;

pub fn record(id: i64, name: &str, price: &str, category_id: i64) -> MenuItemRecord {
    MenuItemRecord {
        id,
        name: name.to_string(),
        image: format!("img/item-{}.jpg", id),
        price: RawPrice::Text(price.to_string()),
        description: format!("{} description", name),
        category_id,
        status: MenuItemStatus::Available,
    }
}

/// Mains (10): Chicken Adobo 120.00, Pork Sisig 149.50
/// Drinks (20): Iced Tea 35.25
/// Desserts (30): only an unavailable Leche Flan
pub fn sample_catalog() -> CatalogIndex {
    let mut flan = record(4, "Leche Flan", "65", 30);
    flan.status = MenuItemStatus::Unavailable;

    CatalogIndex::load(
        vec![
            MenuCategory::new(10, "Mains"),
            MenuCategory::new(20, "Drinks"),
            MenuCategory::new(30, "Desserts"),
        ],
        vec![
            record(1, "Chicken Adobo", "120", 10),
            record(2, "Pork Sisig", "149.5", 10),
            record(3, "Iced Tea", "35.25", 20),
            flan,
        ],
    )
    .expect("sample catalog is valid")
}

/// The two-item catalog of the worked examples: A = 100.00, B = 50.00, both in X
pub fn two_item_catalog() -> CatalogIndex {
    CatalogIndex::load(
        vec![MenuCategory::new(1, "X")],
        vec![record(1, "A", "100.00", 1), record(2, "B", "50.00", 1)],
    )
    .expect("two item catalog is valid")
}

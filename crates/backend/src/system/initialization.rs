use crate::domain::{a001_menu_category, a002_menu_item};
use anyhow::{Context, Result};
use contracts::domain::a001_menu_category::MenuCategory;
use contracts::domain::a002_menu_item::{MenuItemRecord, RawPrice};
use contracts::enums::MenuItemStatus;
use sea_orm::DatabaseConnection;

/// Fill an empty menu with the house menu so the page has something to show
pub async fn ensure_demo_menu_exists(conn: &DatabaseConnection) -> Result<()> {
    let existing = a001_menu_category::repository::count(conn).await?;
    if existing > 0 {
        tracing::info!("Menu already present ({} categories)", existing);
        return Ok(());
    }

    let (categories, items) = demo_menu();
    a001_menu_category::repository::insert_many(conn, &categories)
        .await
        .context("seeding menu categories")?;
    a002_menu_item::repository::insert_many(conn, &items)
        .await
        .context("seeding menu items")?;

    tracing::info!(
        "Seeded demo menu: {} categories, {} items",
        categories.len(),
        items.len()
    );
    Ok(())
}

fn item(id: i64, name: &str, price: &str, category_id: i64, description: &str) -> MenuItemRecord {
    MenuItemRecord {
        id,
        name: name.to_string(),
        image: format!("img/menu/{}.jpg", id),
        price: RawPrice::Text(price.to_string()),
        description: description.to_string(),
        category_id,
        status: MenuItemStatus::Available,
    }
}

fn demo_menu() -> (Vec<MenuCategory>, Vec<MenuItemRecord>) {
    let categories = vec![
        MenuCategory::new(1, "Rice Meals"),
        MenuCategory::new(2, "Noodles"),
        MenuCategory::new(3, "Desserts"),
        MenuCategory::new(4, "Drinks"),
    ];

    let mut halo_halo = item(11, "Halo-Halo", "95.00", 3, "Shaved ice, sweet beans, leche flan and ube.");
    halo_halo.status = MenuItemStatus::Unavailable;

    let items = vec![
        item(1, "Chicken Adobo", "120.00", 1, "Chicken braised in soy, vinegar and garlic, with rice."),
        item(2, "Pork Sisig", "149.50", 1, "Sizzling chopped pork with onions and calamansi."),
        item(3, "Beef Tapa", "165.00", 1, "Cured beef with garlic rice and fried egg."),
        item(4, "Bangus Silog", "135.00", 1, "Marinated milkfish, garlic rice and egg."),
        item(5, "Pancit Canton", "110.00", 2, "Stir-fried egg noodles with vegetables and pork."),
        item(6, "Pancit Palabok", "115.00", 2, "Rice noodles in shrimp sauce with egg and chicharon."),
        item(7, "Lomi", "99.00", 2, "Thick egg noodle soup."),
        item(8, "Leche Flan", "65.00", 3, "Caramel custard."),
        item(9, "Turon", "35.00", 3, "Banana and jackfruit spring rolls."),
        item(10, "Buko Pandan", "55.00", 3, "Young coconut and pandan jelly in cream."),
        halo_halo,
        item(12, "Iced Tea", "35.25", 4, "House-brewed, lightly sweetened."),
        item(13, "Calamansi Juice", "40.00", 4, "Fresh calamansi over ice."),
        item(14, "Sago't Gulaman", "38.00", 4, "Brown sugar drink with tapioca pearls and jelly."),
    ];

    (categories, items)
}

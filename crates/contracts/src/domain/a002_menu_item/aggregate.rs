use crate::domain::a001_menu_category::MenuCategoryId;
use crate::domain::common::{AggregateId, OrderError, OrderResult};
use crate::enums::MenuItemStatus;
use crate::shared::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub i64);

impl MenuItemId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl AggregateId for MenuItemId {
    const DOM_PREFIX: &'static str = "item";

    fn from_value(value: i64) -> Self {
        Self(value)
    }

    fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Available menu item as held by the catalog index.
///
/// `price` is already normalized to the currency minor unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image_ref: String,
    pub category_id: MenuCategoryId,
}

impl MenuItem {
    pub fn price_label(&self) -> String {
        money::format_money(self.price)
    }

    pub fn details(&self) -> MenuItemDetails {
        MenuItemDetails {
            id: self.id,
            name: self.name.clone(),
            price_label: self.price_label(),
            description: self.description.clone(),
            image_ref: self.image_ref.clone(),
        }
    }
}

/// Content of the item detail modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDetails {
    pub id: MenuItemId,
    pub name: String,
    pub price_label: String,
    pub description: String,
    pub image_ref: String,
}

// ============================================================================
// Provider record
// ============================================================================

/// Price as the catalog provider sends it: a JSON number or a decimal string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    /// Non-negative exact value, `None` when negative or unparsable
    pub fn parse(&self) -> Option<Decimal> {
        match self {
            RawPrice::Number(v) => money::from_f64(*v),
            RawPrice::Text(s) => money::parse_amount(s),
        }
    }

    fn raw(&self) -> String {
        match self {
            RawPrice::Number(v) => v.to_string(),
            RawPrice::Text(s) => s.clone(),
        }
    }
}

impl From<Decimal> for RawPrice {
    fn from(value: Decimal) -> Self {
        RawPrice::Text(value.to_string())
    }
}

/// Menu item row exactly as delivered by the catalog provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: RawPrice,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "menu_category", alias = "menuCategory")]
    pub category_id: i64,
    #[serde(default, alias = "menu_item_status")]
    pub status: MenuItemStatus,
}

impl MenuItemRecord {
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// Validate the record and turn it into a catalog item.
    ///
    /// Category existence is checked by the catalog index, not here.
    pub fn into_item(self) -> OrderResult<MenuItem> {
        let id = MenuItemId::new(self.id);
        let price = self.price.parse().ok_or_else(|| OrderError::InvalidPrice {
            item_id: id.as_string(),
            raw: self.price.raw(),
        })?;

        Ok(MenuItem {
            id,
            name: self.name.trim().to_string(),
            price: money::normalize(price),
            description: self.description,
            image_ref: self.image,
            category_id: MenuCategoryId::new(self.category_id),
        })
    }
}

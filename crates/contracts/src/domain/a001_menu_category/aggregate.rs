use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCategoryId(pub i64);

impl MenuCategoryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl AggregateId for MenuCategoryId {
    const DOM_PREFIX: &'static str = "category";

    fn from_value(value: i64) -> Self {
        Self(value)
    }

    fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MenuCategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: MenuCategoryId,
    pub name: String,
}

impl MenuCategory {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: MenuCategoryId::new(id),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip_through_string() {
        let id = MenuCategoryId::new(12);
        assert_eq!(MenuCategoryId::from_string(&id.as_string()), Ok(id));
        assert!(MenuCategoryId::from_string("x").is_err());
        assert_eq!(id.dom_id(), "category-12");
    }

    #[test]
    fn test_serializes_flat_id() {
        let json = serde_json::to_string(&MenuCategory::new(3, "Drinks")).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Drinks"}"#);
    }
}

use serde::{Deserialize, Serialize};

/// How the customer receives the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "DINE_IN", alias = "DINE IN")]
    DineIn,
    #[serde(rename = "TAKEOUT")]
    Takeout,
    #[serde(rename = "DELIVERY")]
    Delivery,
}

impl OrderType {
    /// Wire code of the order type
    pub fn code(&self) -> &'static str {
        match self {
            OrderType::DineIn => "DINE_IN",
            OrderType::Takeout => "TAKEOUT",
            OrderType::Delivery => "DELIVERY",
        }
    }

    /// Label shown in the order type select
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderType::DineIn => "DINE IN",
            OrderType::Takeout => "TAKEOUT",
            OrderType::Delivery => "DELIVERY",
        }
    }

    pub fn all() -> Vec<OrderType> {
        vec![OrderType::DineIn, OrderType::Takeout, OrderType::Delivery]
    }

    /// Accepts both the wire code and the select label ("DINE IN")
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "DINE_IN" | "DINE IN" => Some(OrderType::DineIn),
            "TAKEOUT" => Some(OrderType::Takeout),
            "DELIVERY" => Some(OrderType::Delivery),
            _ => None,
        }
    }

    /// Cash is settled at the counter for these types
    pub fn collects_cash(&self) -> bool {
        matches!(self, OrderType::DineIn | OrderType::Takeout)
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

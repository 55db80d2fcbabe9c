use serde::{Deserialize, Serialize};

/// Availability flag of a menu item as stored by the catalog provider
///
/// A record without a status is `Other`: only an explicit `"AVAILABLE"` is
/// ever indexed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuItemStatus {
    #[serde(rename = "AVAILABLE")]
    Available,
    #[serde(rename = "UNAVAILABLE")]
    Unavailable,
    /// Any status this build does not know about; never shown
    #[default]
    #[serde(other)]
    Other,
}

impl MenuItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuItemStatus::Available => "AVAILABLE",
            MenuItemStatus::Unavailable => "UNAVAILABLE",
            MenuItemStatus::Other => "OTHER",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "AVAILABLE" => MenuItemStatus::Available,
            "UNAVAILABLE" => MenuItemStatus::Unavailable,
            _ => MenuItemStatus::Other,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MenuItemStatus::Available)
    }
}

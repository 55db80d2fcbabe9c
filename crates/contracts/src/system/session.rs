use serde::{Deserialize, Serialize};

/// Name shown when the identity provider supplied nothing
pub const GUEST_DISPLAY_NAME: &str = "Guest";

/// Already-authenticated user as handed over by the identity provider.
///
/// Presentation only: the ordering engine never derives identity from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub display_name: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "User".to_string()
}

impl SessionUser {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: normalize_display_name(&display_name.into()),
            role: default_role(),
        }
    }

    pub fn guest() -> Self {
        Self::new(GUEST_DISPLAY_NAME)
    }
}

impl Default for SessionUser {
    fn default() -> Self {
        Self::guest()
    }
}

/// Trimmed display name, `Guest` when blank
pub fn normalize_display_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        GUEST_DISPLAY_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

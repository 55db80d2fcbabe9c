use serde::{Deserialize, Serialize};

/// Stage of the order confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConfirmationState {
    /// Browsing the catalog, no form shown
    #[default]
    Idle,
    /// Customer form is open
    FormOpen,
    /// Order accepted; transient while the ledger is being cleared
    Confirmed,
}

impl ConfirmationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmationState::Idle => "idle",
            ConfirmationState::FormOpen => "form open",
            ConfirmationState::Confirmed => "confirmed",
        }
    }
}

impl std::fmt::Display for ConfirmationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

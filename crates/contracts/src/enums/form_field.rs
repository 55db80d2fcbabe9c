use serde::{Deserialize, Serialize};

/// Fields of the customer confirmation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    OrderType,
    CashAmount,
    CustomerName,
    ContactNumber,
    Address,
    Email,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::OrderType => "Order Type",
            FormField::CashAmount => "Cash Amount",
            FormField::CustomerName => "Customer Name",
            FormField::ContactNumber => "Contact Number",
            FormField::Address => "Address",
            FormField::Email => "Email",
        }
    }

    /// Form order, top to bottom
    pub fn all() -> [FormField; 6] {
        [
            FormField::OrderType,
            FormField::CashAmount,
            FormField::CustomerName,
            FormField::ContactNumber,
            FormField::Address,
            FormField::Email,
        ]
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

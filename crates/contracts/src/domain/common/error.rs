use crate::enums::{ConfirmationState, FormField};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type OrderResult<T> = Result<T, OrderError>;

/// What an id was supposed to point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceKind {
    Category,
    Item,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Category => write!(f, "category"),
            ReferenceKind::Item => write!(f, "item"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldProblem {
    Missing,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: FormField,
    pub problem: FieldProblem,
}

impl FieldIssue {
    pub fn missing(field: FormField) -> Self {
        Self {
            field,
            problem: FieldProblem::Missing,
        }
    }

    pub fn invalid(field: FormField) -> Self {
        Self {
            field,
            problem: FieldProblem::Invalid,
        }
    }

    /// Hint shown under the offending input
    pub fn message(&self) -> String {
        match self.problem {
            FieldProblem::Missing => format!("{} is required.", self.field.label()),
            FieldProblem::Invalid => format!("{} is not valid.", self.field.label()),
        }
    }
}

/// Failures of the ordering engine.
///
/// None of them is fatal: the operation that returns one leaves every piece
/// of session state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("unknown {kind} id {id}")]
    InvalidReference { kind: ReferenceKind, id: String },

    #[error("duplicate {kind} id {id} in catalog snapshot")]
    DuplicateId { kind: ReferenceKind, id: String },

    #[error("invalid price {raw:?} for item {item_id}")]
    InvalidPrice { item_id: String, raw: String },

    #[error("cannot confirm an empty cart")]
    EmptyCartGuard,

    #[error("form validation failed: {}", describe_issues(.0))]
    ValidationFailure(Vec<FieldIssue>),

    #[error("cannot {action} while {from}")]
    InvalidTransition {
        from: ConfirmationState,
        action: &'static str,
    },

    #[error("order delivery failed: {0}")]
    Delivery(String),
}

fn describe_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| match i.problem {
            FieldProblem::Missing => format!("{} is required", i.field),
            FieldProblem::Invalid => format!("{} is invalid", i.field),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl OrderError {
    pub fn unknown_item(id: impl ToString) -> Self {
        OrderError::InvalidReference {
            kind: ReferenceKind::Item,
            id: id.to_string(),
        }
    }

    pub fn unknown_category(id: impl ToString) -> Self {
        OrderError::InvalidReference {
            kind: ReferenceKind::Category,
            id: id.to_string(),
        }
    }

    /// Blocking message shown to the customer
    pub fn user_message(&self) -> String {
        match self {
            OrderError::EmptyCartGuard => {
                "Please add items to your order before confirming.".to_string()
            }
            OrderError::ValidationFailure(issues) => {
                let missing = labels(issues, FieldProblem::Missing);
                let invalid = labels(issues, FieldProblem::Invalid);
                match (missing.is_empty(), invalid.is_empty()) {
                    (false, true) => format!("Please fill out: {}.", missing),
                    (true, false) => format!("Please check: {}.", invalid),
                    _ => format!("Please fill out: {}. Please check: {}.", missing, invalid),
                }
            }
            OrderError::InvalidReference { .. } => {
                "That menu entry is no longer available.".to_string()
            }
            OrderError::Delivery(_) => "We could not send your order. Please try again.".to_string(),
            other => other.to_string(),
        }
    }

    /// Fields flagged by a validation failure, empty for any other error
    pub fn field_issues(&self) -> &[FieldIssue] {
        match self {
            OrderError::ValidationFailure(issues) => issues,
            _ => &[],
        }
    }
}

fn labels(issues: &[FieldIssue], problem: FieldProblem) -> String {
    issues
        .iter()
        .filter(|i| i.problem == problem)
        .map(|i| i.field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_issue_message() {
        assert_eq!(
            FieldIssue::missing(FormField::ContactNumber).message(),
            "Contact Number is required."
        );
        assert_eq!(
            FieldIssue::invalid(FormField::Email).message(),
            "Email is not valid."
        );
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let err = OrderError::ValidationFailure(vec![
            FieldIssue::missing(FormField::CustomerName),
            FieldIssue::missing(FormField::Address),
        ]);
        assert_eq!(err.user_message(), "Please fill out: Customer Name, Address.");
        assert_eq!(
            err.to_string(),
            "form validation failed: Customer Name is required, Address is required"
        );
    }

    #[test]
    fn test_mixed_validation_message() {
        let err = OrderError::ValidationFailure(vec![
            FieldIssue::missing(FormField::CashAmount),
            FieldIssue::invalid(FormField::Email),
        ]);
        assert_eq!(
            err.user_message(),
            "Please fill out: Cash Amount. Please check: Email."
        );
    }

    #[test]
    fn test_invalid_reference_display() {
        assert_eq!(OrderError::unknown_item(42).to_string(), "unknown item id 42");
        assert_eq!(
            OrderError::unknown_category(7).to_string(),
            "unknown category id 7"
        );
    }
}

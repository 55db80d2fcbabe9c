use crate::domain::common::{FieldIssue, OrderError, OrderResult};
use crate::enums::{FormField, OrderType};
use crate::shared::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Visibility and required-ness of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldPolicy {
    pub visible: bool,
    pub required: bool,
}

impl FieldPolicy {
    pub const HIDDEN: FieldPolicy = FieldPolicy {
        visible: false,
        required: false,
    };
    pub const OPTIONAL: FieldPolicy = FieldPolicy {
        visible: true,
        required: false,
    };
    pub const REQUIRED: FieldPolicy = FieldPolicy {
        visible: true,
        required: true,
    };
}

/// Field policy of the order-type dependent fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPolicy {
    pub cash_amount: FieldPolicy,
    pub address: FieldPolicy,
    pub contact_number: FieldPolicy,
}

impl FormPolicy {
    /// Row for an unset order type; every other row starts from it
    pub const BASELINE: FormPolicy = FormPolicy {
        cash_amount: FieldPolicy::HIDDEN,
        address: FieldPolicy::HIDDEN,
        contact_number: FieldPolicy::OPTIONAL,
    };

    pub fn for_order_type(order_type: Option<OrderType>) -> Self {
        let mut policy = Self::BASELINE;
        match order_type {
            Some(OrderType::DineIn) | Some(OrderType::Takeout) => {
                policy.cash_amount = FieldPolicy::REQUIRED;
            }
            Some(OrderType::Delivery) => {
                policy.address = FieldPolicy::REQUIRED;
                policy.contact_number = FieldPolicy::REQUIRED;
            }
            None => {}
        }
        policy
    }

    /// Policy of any form field, including the fixed ones
    pub fn field(&self, field: FormField) -> FieldPolicy {
        match field {
            FormField::OrderType | FormField::CustomerName => FieldPolicy::REQUIRED,
            FormField::Email => FieldPolicy::OPTIONAL,
            FormField::CashAmount => self.cash_amount,
            FormField::Address => self.address,
            FormField::ContactNumber => self.contact_number,
        }
    }

    pub fn required_fields(&self) -> Vec<FormField> {
        FormField::all()
            .into_iter()
            .filter(|f| self.field(*f).required)
            .collect()
    }
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Raw text of the customer form as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormValues {
    pub customer_name: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub cash_amount: String,
}

/// Form content that passed validation; hidden fields are dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrderForm {
    pub order_type: OrderType,
    pub customer_name: String,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub cash_amount: Option<Decimal>,
}

/// Order type selection and the field policy it implies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFormController {
    selected: Option<OrderType>,
    policy: FormPolicy,
}

impl OrderFormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an order type (or clear it). The policy is rebuilt from the
    /// baseline every time, so no flag of the previous type survives.
    pub fn set_order_type(&mut self, order_type: Option<OrderType>) {
        self.selected = order_type;
        self.policy = FormPolicy::for_order_type(order_type);
        log::debug!(
            "order type set to {}",
            order_type.map(|t| t.code()).unwrap_or("unset")
        );
    }

    pub fn selected_order_type(&self) -> Option<OrderType> {
        self.selected
    }

    pub fn policy(&self) -> FormPolicy {
        self.policy
    }

    pub fn reset(&mut self) {
        self.set_order_type(None);
    }

    /// Check the values against the current policy
    pub fn validate(&self, values: &OrderFormValues) -> OrderResult<ValidatedOrderForm> {
        let mut issues = Vec::new();
        let policy = self.policy;

        if self.selected.is_none() {
            issues.push(FieldIssue::missing(FormField::OrderType));
        }

        let cash_amount = if policy.cash_amount.visible {
            let raw = values.cash_amount.trim();
            if raw.is_empty() {
                if policy.cash_amount.required {
                    issues.push(FieldIssue::missing(FormField::CashAmount));
                }
                None
            } else {
                match money::parse_amount(raw) {
                    Some(v) => Some(v),
                    None => {
                        issues.push(FieldIssue::invalid(FormField::CashAmount));
                        None
                    }
                }
            }
        } else {
            None
        };

        let customer_name = values.customer_name.trim();
        if customer_name.is_empty() {
            issues.push(FieldIssue::missing(FormField::CustomerName));
        }

        let contact_number = non_empty(&values.contact_number);
        if policy.contact_number.required && contact_number.is_none() {
            issues.push(FieldIssue::missing(FormField::ContactNumber));
        }

        let address = if policy.address.visible {
            non_empty(&values.address)
        } else {
            None
        };
        if policy.address.required && address.is_none() {
            issues.push(FieldIssue::missing(FormField::Address));
        }

        let email = non_empty(&values.email);
        if let Some(e) = &email {
            if !looks_like_email(e) {
                issues.push(FieldIssue::invalid(FormField::Email));
            }
        }

        match self.selected {
            Some(order_type) if issues.is_empty() => Ok(ValidatedOrderForm {
                order_type,
                customer_name: customer_name.to_string(),
                contact_number,
                email,
                address,
                cash_amount,
            }),
            _ => Err(OrderError::ValidationFailure(issues)),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Roughly the bar of a browser email input: `local@domain`, no whitespace
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::FieldProblem;
    use std::str::FromStr;

    fn values() -> OrderFormValues {
        OrderFormValues {
            customer_name: "Cara".into(),
            contact_number: String::new(),
            email: String::new(),
            address: String::new(),
            cash_amount: String::new(),
        }
    }

    #[test]
    fn test_policy_table() {
        let unset = FormPolicy::for_order_type(None);
        assert_eq!(unset.cash_amount, FieldPolicy::HIDDEN);
        assert_eq!(unset.address, FieldPolicy::HIDDEN);
        assert!(!unset.contact_number.required);

        for t in [OrderType::DineIn, OrderType::Takeout] {
            let p = FormPolicy::for_order_type(Some(t));
            assert_eq!(p.cash_amount, FieldPolicy::REQUIRED);
            assert_eq!(p.address, FieldPolicy::HIDDEN);
            assert!(!p.contact_number.required);
        }

        let delivery = FormPolicy::for_order_type(Some(OrderType::Delivery));
        assert_eq!(delivery.cash_amount, FieldPolicy::HIDDEN);
        assert!(delivery.address.visible);
        assert!(delivery.address.required);
        assert!(delivery.contact_number.required);
    }

    #[test]
    fn test_switching_delivery_to_dine_in_leaves_no_stale_flags() {
        let mut form = OrderFormController::new();
        form.set_order_type(Some(OrderType::Delivery));
        form.set_order_type(Some(OrderType::DineIn));

        let p = form.policy();
        assert!(!p.address.required);
        assert!(!p.address.visible);
        assert!(!p.contact_number.required);
        assert!(p.cash_amount.required);
        assert_eq!(p, FormPolicy::for_order_type(Some(OrderType::DineIn)));
    }

    #[test]
    fn test_same_type_twice_is_idempotent() {
        let mut once = OrderFormController::new();
        once.set_order_type(Some(OrderType::Takeout));
        let mut twice = once;
        twice.set_order_type(Some(OrderType::Takeout));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_required_fields() {
        let delivery = FormPolicy::for_order_type(Some(OrderType::Delivery));
        assert_eq!(
            delivery.required_fields(),
            vec![
                FormField::OrderType,
                FormField::CustomerName,
                FormField::ContactNumber,
                FormField::Address
            ]
        );
    }

    #[test]
    fn test_unset_order_type_fails_validation() {
        let form = OrderFormController::new();
        let err = form.validate(&values()).unwrap_err();
        assert_eq!(err.field_issues(), &[FieldIssue::missing(FormField::OrderType)]);
    }

    #[test]
    fn test_dine_in_requires_cash_amount() {
        let mut form = OrderFormController::new();
        form.set_order_type(Some(OrderType::DineIn));
        let err = form.validate(&values()).unwrap_err();
        assert_eq!(err.field_issues(), &[FieldIssue::missing(FormField::CashAmount)]);

        let mut v = values();
        v.cash_amount = "500".into();
        v.address = "ignored for dine in".into();
        let ok = form.validate(&v).unwrap();
        assert_eq!(ok.order_type, OrderType::DineIn);
        assert_eq!(ok.cash_amount, Some(Decimal::from_str("500").unwrap()));
        assert_eq!(ok.address, None);
    }

    #[test]
    fn test_negative_cash_amount_is_invalid() {
        let mut form = OrderFormController::new();
        form.set_order_type(Some(OrderType::Takeout));
        let mut v = values();
        v.cash_amount = "-20".into();
        let err = form.validate(&v).unwrap_err();
        assert_eq!(err.field_issues()[0].problem, FieldProblem::Invalid);
    }

    #[test]
    fn test_delivery_requires_address_and_contact() {
        let mut form = OrderFormController::new();
        form.set_order_type(Some(OrderType::Delivery));
        let mut v = values();
        v.cash_amount = "1000".into();
        v.customer_name = "  ".into();

        let err = form.validate(&v).unwrap_err();
        assert_eq!(
            err.field_issues(),
            &[
                FieldIssue::missing(FormField::CustomerName),
                FieldIssue::missing(FormField::ContactNumber),
                FieldIssue::missing(FormField::Address),
            ]
        );

        v.customer_name = "Cara".into();
        v.contact_number = "0917 123 4567".into();
        v.address = "12 Mabini St".into();
        let ok = form.validate(&v).unwrap();
        assert_eq!(ok.address.as_deref(), Some("12 Mabini St"));
        assert_eq!(ok.cash_amount, None);
    }

    #[test]
    fn test_email_is_optional_but_checked() {
        let mut form = OrderFormController::new();
        form.set_order_type(Some(OrderType::DineIn));
        let mut v = values();
        v.cash_amount = "200".into();

        v.email = "not-an-email".into();
        let err = form.validate(&v).unwrap_err();
        assert_eq!(err.field_issues(), &[FieldIssue::invalid(FormField::Email)]);

        v.email = "cara@example.com".into();
        assert_eq!(
            form.validate(&v).unwrap().email.as_deref(),
            Some("cara@example.com")
        );
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email("a.b@c.ph"));
        assert!(!looks_like_email("@b.com"));
        assert!(!looks_like_email("a@"));
        assert!(!looks_like_email("a b@c.com"));
        assert!(!looks_like_email("a@b@c"));
    }
}

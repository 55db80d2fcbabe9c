use super::fixtures::{sample_catalog, two_item_catalog};
use super::*;
use crate::domain::a001_menu_category::MenuCategoryId;
use crate::domain::a002_menu_item::MenuItemId;
use crate::domain::common::{FieldIssue, OrderError};
use crate::enums::{ConfirmationState, FormField, OrderType};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn dine_in_values() -> OrderFormValues {
    OrderFormValues {
        customer_name: "Cara Reyes".into(),
        cash_amount: "500".into(),
        ..Default::default()
    }
}

#[test]
fn test_session_starts_on_first_category() {
    let session = OrderSession::start(sample_catalog(), "");
    assert_eq!(session.active_category(), Some(MenuCategoryId::new(10)));
    assert_eq!(session.header_label(), "Mains");
    assert_eq!(session.visible_items().len(), 2);
    assert_eq!(session.display_name(), "Guest");
    assert!(!session.is_confirm_enabled());
}

#[test]
fn test_session_over_empty_catalog_has_no_active_category() {
    let catalog = CatalogIndex::load(vec![], vec![]).unwrap();
    let session = OrderSession::start(catalog, "Cara");
    assert_eq!(session.active_category(), None);
    assert_eq!(session.header_label(), "Menu");
    assert!(session.visible_items().is_empty());
}

#[test]
fn test_scenario_two_lines_and_badge() {
    let mut session = OrderSession::start(two_item_catalog(), "Cara");
    let a = MenuItemId::new(1);
    let b = MenuItemId::new(2);
    session.increment(a).unwrap();
    session.increment(a).unwrap();
    session.increment(b).unwrap();

    let summary = session.summary();
    assert_eq!(summary.lines.len(), 2);
    assert_eq!(
        (
            summary.lines[0].item_name.as_str(),
            summary.lines[0].unit_price,
            summary.lines[0].quantity,
            summary.lines[0].subtotal
        ),
        ("A", dec("100.00"), 2, dec("200.00"))
    );
    assert_eq!(
        (
            summary.lines[1].item_name.as_str(),
            summary.lines[1].unit_price,
            summary.lines[1].quantity,
            summary.lines[1].subtotal
        ),
        ("B", dec("50.00"), 1, dec("50.00"))
    );
    assert_eq!(summary.total, dec("250.00"));
    assert_eq!(summary.total_label(), "Php 250.00");
    assert_eq!(session.badges().count(MenuCategoryId::new(1)), 3);
}

#[test]
fn test_scenario_decrement_at_zero() {
    let mut session = OrderSession::start(two_item_catalog(), "Cara");
    assert_eq!(session.decrement(MenuItemId::new(1)), Ok(0));
    assert_eq!(session.quantity(MenuItemId::new(1)), 0);
    assert!(session.summary().is_empty);
}

#[test]
fn test_scenario_delivery_policy() {
    let mut session = OrderSession::start(two_item_catalog(), "Cara");
    session.set_order_type(Some(OrderType::Delivery));
    let policy = session.form_policy();
    assert!(policy.address.visible && policy.address.required);
    assert!(!policy.cash_amount.visible);
    assert!(policy.contact_number.required);
}

#[test]
fn test_scenario_empty_cart_guard() {
    let mut session = OrderSession::start(two_item_catalog(), "Cara");
    let err = session.request_confirm().unwrap_err();
    assert_eq!(err, OrderError::EmptyCartGuard);
    assert_eq!(
        err.user_message(),
        "Please add items to your order before confirming."
    );
    assert_eq!(session.confirmation_state(), ConfirmationState::Idle);
}

#[test]
fn test_scenario_full_cycle_resets_ledger() {
    let mut session = OrderSession::start(two_item_catalog(), "Cara");
    let a = MenuItemId::new(1);
    session.increment(a).unwrap();
    session.increment(a).unwrap();

    session.request_confirm().unwrap();
    assert_eq!(session.confirmation_state(), ConfirmationState::FormOpen);
    session.set_order_type(Some(OrderType::DineIn));

    let sink = RecordingSink::new();
    let ack = session.submit(&dine_in_values(), &sink).unwrap();
    assert_eq!(ack.message, "Order confirmed! Thank you for your purchase.");
    assert_eq!(ack.total, dec("200.00"));

    assert_eq!(session.quantity(a), 0);
    assert!(session.summary().is_empty);
    assert_eq!(session.summary().total, Decimal::ZERO);
    assert_eq!(session.badges().total(), 0);
    assert_eq!(session.confirmation_state(), ConfirmationState::Idle);
    assert_eq!(session.order_type(), None);
    assert_eq!(session.last_acknowledgement(), Some(&ack));

    let received = sink.received();
    assert_eq!(received.len(), 1);
    let payload = &received[0];
    assert_eq!(payload.order_ref, ack.order_ref);
    assert_eq!(payload.order_type, OrderType::DineIn);
    assert_eq!(payload.customer_name, "Cara Reyes");
    assert_eq!(payload.cash_amount, Some(dec("500")));
    assert_eq!(payload.address, None);
    assert_eq!(payload.lines.len(), 1);
    assert_eq!(payload.lines[0].quantity, 2);
    assert_eq!(payload.total, dec("200.00"));
    assert_eq!(payload.placed_by, "Cara");

    // recomputing from scratch agrees with the session
    let fresh = crate::projections::p900_order_summary::recompute(session.ledger(), session.catalog());
    assert!(fresh.is_empty);
    assert_eq!(fresh.total, Decimal::ZERO);
}

#[test]
fn test_invalid_form_keeps_form_open_and_cart() {
    let mut session = OrderSession::start(two_item_catalog(), "Cara");
    session.increment(MenuItemId::new(2)).unwrap();
    session.request_confirm().unwrap();
    session.set_order_type(Some(OrderType::Delivery));

    let sink = RecordingSink::new();
    let err = session.submit(&dine_in_values(), &sink).unwrap_err();
    assert_eq!(
        err.field_issues(),
        &[
            FieldIssue::missing(FormField::ContactNumber),
            FieldIssue::missing(FormField::Address)
        ]
    );
    assert_eq!(session.confirmation_state(), ConfirmationState::FormOpen);
    assert_eq!(session.quantity(MenuItemId::new(2)), 1);
    assert!(sink.is_empty());
}

#[test]
fn test_delivery_payload_drops_cash_amount() {
    let mut session = OrderSession::start(two_item_catalog(), "Cara");
    session.increment(MenuItemId::new(2)).unwrap();
    session.request_confirm().unwrap();
    session.set_order_type(Some(OrderType::Delivery));

    let values = OrderFormValues {
        customer_name: "Cara".into(),
        contact_number: "09171234567".into(),
        address: "12 Mabini St".into(),
        cash_amount: "999".into(),
        email: "cara@example.com".into(),
    };
    let sink = RecordingSink::new();
    session.submit(&values, &sink).unwrap();

    let payload = &sink.received()[0];
    assert_eq!(payload.order_type, OrderType::Delivery);
    assert_eq!(payload.address.as_deref(), Some("12 Mabini St"));
    assert_eq!(payload.contact_number.as_deref(), Some("09171234567"));
    assert_eq!(payload.email.as_deref(), Some("cara@example.com"));
    assert_eq!(payload.cash_amount, None);
}

#[test]
fn test_hidden_items_still_count() {
    let mut session = OrderSession::start(sample_catalog(), "Cara");
    session.increment(MenuItemId::new(3)).unwrap(); // drinks, not visible
    assert!(session
        .visible_items()
        .iter()
        .all(|i| i.id != MenuItemId::new(3)));
    assert_eq!(session.summary().total, dec("35.25"));
    assert_eq!(session.badges().count(MenuCategoryId::new(20)), 1);

    session.select_category(MenuCategoryId::new(20)).unwrap();
    assert_eq!(session.quantity(MenuItemId::new(3)), 1);
}

#[test]
fn test_unknown_ids_leave_session_untouched() {
    let mut session = OrderSession::start(sample_catalog(), "Cara");
    session.increment(MenuItemId::new(1)).unwrap();

    assert!(session.increment(MenuItemId::new(500)).is_err());
    assert!(session.select_category(MenuCategoryId::new(500)).is_err());
    assert_eq!(session.ledger().total_quantity(), 1);
    assert_eq!(session.active_category(), Some(MenuCategoryId::new(10)));
    assert!(session.item_details(MenuItemId::new(500)).is_err());
}

#[test]
fn test_cancel_then_reopen() {
    let mut session = OrderSession::start(sample_catalog(), "Cara");
    session.increment(MenuItemId::new(1)).unwrap();
    session.request_confirm().unwrap();
    session.cancel_confirm();
    assert_eq!(session.confirmation_state(), ConfirmationState::Idle);
    assert_eq!(session.quantity(MenuItemId::new(1)), 1);
    session.request_confirm().unwrap();
    assert_eq!(session.confirmation_state(), ConfirmationState::FormOpen);
}

#[test]
fn test_two_phase_submit_matches_sink_submit() {
    let mut session = OrderSession::start(two_item_catalog(), "Cara");
    session.increment(MenuItemId::new(1)).unwrap();
    session.request_confirm().unwrap();
    session.set_order_type(Some(OrderType::Takeout));

    let payload = session.prepare_order(&dine_in_values()).unwrap();
    assert_eq!(session.quantity(MenuItemId::new(1)), 1);
    assert_eq!(session.confirmation_state(), ConfirmationState::FormOpen);
    assert_eq!(payload.order_type, OrderType::Takeout);

    let ack = session.complete_order(&payload).unwrap();
    assert_eq!(ack.total, dec("100.00"));
    assert!(session.summary().is_empty);
    assert_eq!(session.badges().count(MenuCategoryId::new(1)), 0);
}

#[test]
fn test_late_acceptance_after_dismiss_keeps_new_items() {
    let mut session = OrderSession::start(two_item_catalog(), "Cara");
    session.increment(MenuItemId::new(1)).unwrap();
    session.request_confirm().unwrap();
    session.set_order_type(Some(OrderType::DineIn));
    let payload = session.prepare_order(&dine_in_values()).unwrap();
    assert_eq!(payload.lines.len(), 1);

    session.cancel_confirm();
    session.increment(MenuItemId::new(2)).unwrap();
    session.increment(MenuItemId::new(2)).unwrap();

    let err = session.complete_order(&payload).unwrap_err();
    assert!(matches!(
        err,
        OrderError::InvalidTransition {
            from: ConfirmationState::Idle,
            ..
        }
    ));
    assert_eq!(session.quantity(MenuItemId::new(1)), 1);
    assert_eq!(session.quantity(MenuItemId::new(2)), 2);
    assert_eq!(session.summary().total, dec("200.00"));
    assert!(session.last_acknowledgement().is_none());
}

// ============================================================================
// Properties
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Op {
    Inc(i64),
    Dec(i64),
    Select(i64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1i64..=4).prop_map(Op::Inc),
        (1i64..=4).prop_map(Op::Dec),
        prop_oneof![Just(10i64), Just(20i64), Just(30i64)].prop_map(Op::Select),
    ]
}

fn apply(session: &mut OrderSession, op: Op) {
    // id 4 is unavailable: the call must fail and change nothing
    let _ = match op {
        Op::Inc(id) => session.increment(MenuItemId::new(id)).map(|_| ()),
        Op::Dec(id) => session.decrement(MenuItemId::new(id)).map(|_| ()),
        Op::Select(id) => session.select_category(MenuCategoryId::new(id)),
    };
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_quantities_never_negative_and_match_model(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut session = OrderSession::start(sample_catalog(), "Cara");
        let mut model = [0i64; 5];
        for op in ops {
            apply(&mut session, op);
            match op {
                Op::Inc(id) if id != 4 => model[id as usize] += 1,
                Op::Dec(id) if id != 4 => model[id as usize] = (model[id as usize] - 1).max(0),
                _ => {}
            }
            for id in 1..=4i64 {
                prop_assert_eq!(i64::from(session.quantity(MenuItemId::new(id))), model[id as usize]);
            }
        }
    }

    #[test]
    fn prop_total_equals_sum_of_lines(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut session = OrderSession::start(sample_catalog(), "Cara");
        for op in ops {
            apply(&mut session, op);
            let summary = session.summary();
            let sum: Decimal = summary.lines.iter().map(|l| l.subtotal).sum();
            prop_assert_eq!(summary.total, sum);
            for line in &summary.lines {
                prop_assert!(line.quantity > 0);
                prop_assert_eq!(line.subtotal, line.unit_price * Decimal::from(line.quantity));
            }
            prop_assert_eq!(summary.is_empty, session.ledger().total_quantity() == 0);
            prop_assert_eq!(session.is_confirm_enabled(), session.ledger().total_quantity() > 0);
        }
    }

    #[test]
    fn prop_badges_match_category_sums(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut session = OrderSession::start(sample_catalog(), "Cara");
        for op in ops {
            apply(&mut session, op);
            for category in session.catalog().categories() {
                let expected: u64 = session
                    .catalog()
                    .items_by_category(category.id)
                    .iter()
                    .map(|i| u64::from(session.quantity(i.id)))
                    .sum();
                prop_assert_eq!(session.badges().count(category.id), expected);
            }
        }
    }

    #[test]
    fn prop_visible_items_belong_to_active_category(ops in prop::collection::vec(arb_op(), 0..32)) {
        let mut session = OrderSession::start(sample_catalog(), "Cara");
        for op in ops {
            apply(&mut session, op);
            let active = session.active_category();
            prop_assert!(active.is_some());
            let expected = session.catalog().items_by_category(active.unwrap()).len();
            let visible = session.visible_items();
            prop_assert_eq!(visible.len(), expected);
            prop_assert!(visible.iter().all(|i| Some(i.category_id) == active));
        }
    }

    #[test]
    fn prop_order_type_switches_leave_no_stale_flags(
        types in prop::collection::vec(
            prop_oneof![
                Just(None),
                Just(Some(OrderType::DineIn)),
                Just(Some(OrderType::Takeout)),
                Just(Some(OrderType::Delivery)),
            ],
            1..16,
        )
    ) {
        let mut form = OrderFormController::new();
        for t in &types {
            form.set_order_type(*t);
        }
        let last = *types.last().unwrap();
        prop_assert_eq!(form.policy(), FormPolicy::for_order_type(last));
        prop_assert_eq!(form.selected_order_type(), last);
    }
}

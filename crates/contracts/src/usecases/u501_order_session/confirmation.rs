use super::order_form::{OrderFormController, OrderFormValues};
use super::order_sink::OrderSink;
use super::QuantityLedger;
use crate::domain::a003_customer_order::{
    OrderAcknowledgement, OrderPayload, ORDER_CONFIRMED_MESSAGE,
};
use crate::domain::common::{OrderError, OrderResult};
use crate::enums::ConfirmationState;
use crate::projections::p900_order_summary::OrderSummary;
use uuid::Uuid;

/// Idle -> FormOpen -> Confirmed -> Idle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationFlow {
    state: ConfirmationState,
    last_acknowledgement: Option<OrderAcknowledgement>,
}

impl ConfirmationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConfirmationState {
        self.state
    }

    pub fn is_form_open(&self) -> bool {
        self.state == ConfirmationState::FormOpen
    }

    pub fn last_acknowledgement(&self) -> Option<&OrderAcknowledgement> {
        self.last_acknowledgement.as_ref()
    }

    /// Open the customer form; refused softly for an empty cart
    pub fn request_confirm(&mut self, summary: &OrderSummary) -> OrderResult<()> {
        if summary.is_empty {
            log::debug!("confirm requested with an empty cart");
            return Err(OrderError::EmptyCartGuard);
        }
        match self.state {
            ConfirmationState::Idle | ConfirmationState::FormOpen => {
                self.state = ConfirmationState::FormOpen;
                Ok(())
            }
            from => Err(OrderError::InvalidTransition {
                from,
                action: "open the order form",
            }),
        }
    }

    /// Dismiss the form; the cart stays as it is
    pub fn cancel(&mut self) {
        if self.state == ConfirmationState::FormOpen {
            self.state = ConfirmationState::Idle;
        }
    }

    /// Validate the form and build the payload without touching any state.
    pub fn prepare(
        &self,
        form: &OrderFormController,
        values: &OrderFormValues,
        summary: &OrderSummary,
        placed_by: &str,
    ) -> OrderResult<OrderPayload> {
        if self.state != ConfirmationState::FormOpen {
            return Err(OrderError::InvalidTransition {
                from: self.state,
                action: "submit the order",
            });
        }
        if summary.is_empty {
            return Err(OrderError::EmptyCartGuard);
        }

        let validated = form.validate(values)?;
        Ok(OrderPayload {
            order_ref: Uuid::new_v4(),
            order_type: validated.order_type,
            customer_name: validated.customer_name,
            contact_number: validated.contact_number,
            email: validated.email,
            address: validated.address,
            cash_amount: validated.cash_amount,
            lines: summary.lines.clone(),
            total: summary.total,
            placed_by: placed_by.to_string(),
        })
    }

    /// Record an accepted payload: clear the cart and the form, back to `Idle`.
    ///
    /// Only valid while the form that produced the payload is still open;
    /// otherwise the cart may already hold lines the payload never carried.
    pub fn complete(
        &mut self,
        form: &mut OrderFormController,
        ledger: &mut QuantityLedger,
        payload: &OrderPayload,
    ) -> OrderResult<OrderAcknowledgement> {
        if self.state != ConfirmationState::FormOpen {
            log::warn!(
                "order {} accepted while {}, cart left untouched",
                payload.order_ref,
                self.state
            );
            return Err(OrderError::InvalidTransition {
                from: self.state,
                action: "complete the order",
            });
        }
        self.state = ConfirmationState::Confirmed;
        ledger.reset();
        form.reset();
        let acknowledgement = OrderAcknowledgement {
            order_ref: payload.order_ref,
            message: ORDER_CONFIRMED_MESSAGE.to_string(),
            total: payload.total,
        };
        log::info!(
            "order {} confirmed ({}, total {})",
            payload.order_ref,
            payload.order_type,
            payload.total
        );
        self.last_acknowledgement = Some(acknowledgement.clone());
        self.state = ConfirmationState::Idle;
        Ok(acknowledgement)
    }

    /// Validate, hand the payload to the sink and clear the cart.
    ///
    /// Any failure leaves the flow in `FormOpen` with ledger and form as they
    /// were.
    pub fn submit(
        &mut self,
        form: &mut OrderFormController,
        values: &OrderFormValues,
        ledger: &mut QuantityLedger,
        summary: &OrderSummary,
        placed_by: &str,
        sink: &dyn OrderSink,
    ) -> OrderResult<OrderAcknowledgement> {
        let payload = self.prepare(form, values, summary, placed_by)?;
        if let Err(e) = sink.submit(&payload) {
            log::warn!("order {} was not accepted: {:#}", payload.order_ref, e);
            return Err(OrderError::Delivery(e.to_string()));
        }
        self.complete(form, ledger, &payload)
    }
}

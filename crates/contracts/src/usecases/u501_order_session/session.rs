use super::order_form::{FormPolicy, OrderFormController, OrderFormValues};
use super::order_sink::OrderSink;
use super::{CatalogIndex, CategoryFilter, ConfirmationFlow, QuantityLedger};
use crate::domain::a001_menu_category::MenuCategoryId;
use crate::domain::a002_menu_item::{MenuItem, MenuItemDetails, MenuItemId};
use crate::domain::a003_customer_order::{OrderAcknowledgement, OrderPayload};
use crate::domain::common::OrderResult;
use crate::enums::{ConfirmationState, OrderType};
use crate::projections::p900_order_summary::{self, OrderSummary};
use crate::projections::p901_category_badges::{self, CategoryBadges};
use crate::system::session::normalize_display_name;

/// State store of one ordering session.
///
/// Every mutation goes through a method here and is followed by a full,
/// synchronous rebuild of the summary and the badges, so readers never see
/// derived data that lags behind the ledger.
#[derive(Debug, Clone)]
pub struct OrderSession {
    catalog: CatalogIndex,
    display_name: String,
    ledger: QuantityLedger,
    filter: CategoryFilter,
    form: OrderFormController,
    flow: ConfirmationFlow,
    summary: OrderSummary,
    badges: CategoryBadges,
}

impl OrderSession {
    /// Start a session over a loaded catalog; the first category, if any,
    /// becomes active.
    pub fn start(catalog: CatalogIndex, display_name: &str) -> Self {
        let mut session = Self {
            catalog,
            display_name: normalize_display_name(display_name),
            ledger: QuantityLedger::new(),
            filter: CategoryFilter::new(),
            form: OrderFormController::new(),
            flow: ConfirmationFlow::new(),
            summary: OrderSummary::empty(),
            badges: CategoryBadges::default(),
        };
        if let Some(first) = session.catalog.first_category().map(|c| c.id) {
            if let Err(e) = session.filter.select_category(&session.catalog, first) {
                log::warn!("could not activate the first category: {}", e);
            }
        }
        session.recompute();
        session
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn ledger(&self) -> &QuantityLedger {
        &self.ledger
    }

    pub fn quantity(&self, item_id: MenuItemId) -> u32 {
        self.ledger.quantity(item_id)
    }

    pub fn is_selected(&self, item_id: MenuItemId) -> bool {
        self.ledger.is_selected(item_id)
    }

    pub fn summary(&self) -> &OrderSummary {
        &self.summary
    }

    pub fn badges(&self) -> &CategoryBadges {
        &self.badges
    }

    pub fn active_category(&self) -> Option<MenuCategoryId> {
        self.filter.active_category()
    }

    pub fn visible_items(&self) -> Vec<&MenuItem> {
        self.filter.visible_items(&self.catalog)
    }

    pub fn header_label(&self) -> &str {
        self.filter.header_label(&self.catalog)
    }

    pub fn item_details(&self, item_id: MenuItemId) -> OrderResult<MenuItemDetails> {
        self.catalog.item_details(item_id)
    }

    pub fn order_type(&self) -> Option<OrderType> {
        self.form.selected_order_type()
    }

    pub fn form_policy(&self) -> FormPolicy {
        self.form.policy()
    }

    pub fn confirmation_state(&self) -> ConfirmationState {
        self.flow.state()
    }

    pub fn is_confirm_enabled(&self) -> bool {
        self.summary.confirm_enabled()
    }

    pub fn last_acknowledgement(&self) -> Option<&OrderAcknowledgement> {
        self.flow.last_acknowledgement()
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn increment(&mut self, item_id: MenuItemId) -> OrderResult<u32> {
        let quantity = self.ledger.increment(&self.catalog, item_id)?;
        self.recompute();
        Ok(quantity)
    }

    pub fn decrement(&mut self, item_id: MenuItemId) -> OrderResult<u32> {
        let quantity = self.ledger.decrement(&self.catalog, item_id)?;
        self.recompute();
        Ok(quantity)
    }

    pub fn select_category(&mut self, category_id: MenuCategoryId) -> OrderResult<()> {
        self.filter.select_category(&self.catalog, category_id)
    }

    pub fn set_order_type(&mut self, order_type: Option<OrderType>) {
        self.form.set_order_type(order_type);
    }

    pub fn request_confirm(&mut self) -> OrderResult<()> {
        self.flow.request_confirm(&self.summary)
    }

    pub fn cancel_confirm(&mut self) {
        self.flow.cancel();
    }

    pub fn submit(
        &mut self,
        values: &OrderFormValues,
        sink: &dyn OrderSink,
    ) -> OrderResult<OrderAcknowledgement> {
        let acknowledgement = self.flow.submit(
            &mut self.form,
            values,
            &mut self.ledger,
            &self.summary,
            &self.display_name,
            sink,
        )?;
        self.recompute();
        Ok(acknowledgement)
    }

    /// First half of an asynchronous submit: nothing changes until
    /// [`complete_order`](Self::complete_order) is called with the payload.
    pub fn prepare_order(&self, values: &OrderFormValues) -> OrderResult<OrderPayload> {
        self.flow
            .prepare(&self.form, values, &self.summary, &self.display_name)
    }

    /// Second half: the payload was accepted. Refused with
    /// `InvalidTransition` once the form has been dismissed.
    pub fn complete_order(&mut self, payload: &OrderPayload) -> OrderResult<OrderAcknowledgement> {
        let acknowledgement = self
            .flow
            .complete(&mut self.form, &mut self.ledger, payload)?;
        self.recompute();
        Ok(acknowledgement)
    }

    fn recompute(&mut self) {
        self.summary = p900_order_summary::recompute(&self.ledger, &self.catalog);
        self.badges = p901_category_badges::recompute(&self.ledger, &self.catalog);
    }
}

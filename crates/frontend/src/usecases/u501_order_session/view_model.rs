use super::model;
use crate::layout::global_context::{AppGlobalContext, NotificationKind};
use contracts::domain::a001_menu_category::MenuCategoryId;
use contracts::domain::a002_menu_item::{MenuItemDetails, MenuItemId};
use contracts::domain::common::{FieldIssue, OrderError};
use contracts::enums::{FormField, OrderType};
use contracts::system::session::GUEST_DISPLAY_NAME;
use contracts::usecases::u501_order_session::{CatalogIndex, OrderFormValues, OrderSession};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel of the menu page.
///
/// `session` is `None` until the catalog has been loaded; every command is a
/// no-op before that.
#[derive(Clone, Copy)]
pub struct OrderPageViewModel {
    pub session: RwSignal<Option<OrderSession>>,
    pub display_name: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    pub form_values: RwSignal<OrderFormValues>,
    pub form_issues: RwSignal<Vec<FieldIssue>>,
    pub details: RwSignal<Option<MenuItemDetails>>,
    pub is_submitting: RwSignal<bool>,
}

impl OrderPageViewModel {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            display_name: RwSignal::new(GUEST_DISPLAY_NAME.to_string()),
            is_loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
            form_values: RwSignal::new(OrderFormValues::default()),
            form_issues: RwSignal::new(vec![]),
            details: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }

    /// Read from the session, `None` while it is not loaded
    pub fn read<T>(&self, f: impl FnOnce(&OrderSession) -> T) -> Option<T> {
        self.session.with(|s| s.as_ref().map(f))
    }

    fn update<T>(&self, f: impl FnOnce(&mut OrderSession) -> T) -> Option<T> {
        let mut out = None;
        self.session.update(|s| {
            if let Some(session) = s.as_mut() {
                out = Some(f(session));
            }
        });
        out
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Fetch the user and the catalog, then start the session
    pub fn load(&self) {
        let this = *self;
        this.is_loading.set(true);
        spawn_local(async move {
            // The page works for guests too
            let display_name = match model::fetch_current_user().await {
                Ok(user) => user.display_name,
                Err(e) => {
                    log::warn!("current user unavailable, continuing as guest: {}", e);
                    GUEST_DISPLAY_NAME.to_string()
                }
            };

            let catalog = model::fetch_catalog()
                .await
                .and_then(|snapshot| CatalogIndex::from_snapshot(snapshot).map_err(|e| e.to_string()));

            match catalog {
                Ok(catalog) => {
                    log::info!(
                        "catalog loaded: {} categories, {} items",
                        catalog.categories().len(),
                        catalog.items().len()
                    );
                    let session = OrderSession::start(catalog, &display_name);
                    this.display_name.set(session.display_name().to_string());
                    this.session.set(Some(session));
                    this.load_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load the menu: {}", e);
                    this.load_error
                        .set(Some(format!("The menu could not be loaded: {}", e)));
                }
            }
            this.is_loading.set(false);
        });
    }

    // ------------------------------------------------------------------
    // Browsing and cart
    // ------------------------------------------------------------------

    pub fn select_category(&self, category_id: MenuCategoryId) {
        if let Some(Err(e)) = self.update(|s| s.select_category(category_id)) {
            log::warn!("{}", e);
        }
    }

    pub fn increment(&self, item_id: MenuItemId) {
        if let Some(Err(e)) = self.update(|s| s.increment(item_id)) {
            log::warn!("{}", e);
        }
    }

    pub fn decrement(&self, item_id: MenuItemId) {
        if let Some(Err(e)) = self.update(|s| s.decrement(item_id)) {
            log::warn!("{}", e);
        }
    }

    pub fn show_details(&self, item_id: MenuItemId) {
        match self.read(|s| s.item_details(item_id)) {
            Some(Ok(details)) => self.details.set(Some(details)),
            Some(Err(e)) => log::warn!("{}", e),
            None => {}
        }
    }

    pub fn close_details(&self) {
        self.details.set(None);
    }

    // ------------------------------------------------------------------
    // Confirmation
    // ------------------------------------------------------------------

    pub fn request_confirm(&self, ctx: AppGlobalContext) {
        match self.update(|s| s.request_confirm()) {
            Some(Err(e @ OrderError::EmptyCartGuard)) => {
                ctx.notify(NotificationKind::Warning, e.user_message());
            }
            Some(Err(e)) => log::warn!("{}", e),
            _ => self.form_issues.set(vec![]),
        }
    }

    /// Ignored while an order is in flight: the form has to stay open until
    /// the backend answers.
    pub fn cancel_confirm(&self) {
        if self.is_submitting.get_untracked() {
            return;
        }
        self.update(|s| s.cancel_confirm());
        self.form_issues.set(vec![]);
    }

    /// `value` is the `<select>` value; the placeholder option clears it
    pub fn set_order_type(&self, value: &str) {
        let order_type = OrderType::from_code(value);
        self.update(|s| s.set_order_type(order_type));
        // Issues of fields that just disappeared are stale
        self.form_issues.set(vec![]);
    }

    pub fn issue_for(&self, field: FormField) -> Option<String> {
        self.form_issues.with(|issues| {
            issues
                .iter()
                .find(|i| i.field == field)
                .map(|i| i.message())
        })
    }

    /// Validate, post the order, and clear the cart once the backend accepted it
    pub fn submit(&self, ctx: AppGlobalContext) {
        if self.is_submitting.get_untracked() {
            return;
        }
        let values = self.form_values.get_untracked();
        let payload = match self.session.with_untracked(|s| s.as_ref().map(|s| s.prepare_order(&values))) {
            Some(Ok(payload)) => payload,
            Some(Err(e)) => {
                let issues = e.field_issues().to_vec();
                if issues.is_empty() {
                    ctx.notify(NotificationKind::Warning, e.user_message());
                }
                self.form_issues.set(issues);
                return;
            }
            None => return,
        };

        self.form_issues.set(vec![]);
        self.is_submitting.set(true);
        let this = *self;
        spawn_local(async move {
            match model::post_order(&payload).await {
                Ok(receipt) => {
                    log::info!("order {} stored as {}", payload.order_ref, receipt.id);
                    match this.update(|s| s.complete_order(&payload)) {
                        Some(Ok(ack)) => {
                            ctx.notify(NotificationKind::Success, ack.message);
                            this.form_values.set(OrderFormValues::default());
                        }
                        Some(Err(e)) => log::warn!("order {}: {}", payload.order_ref, e),
                        None => {}
                    }
                }
                Err(e) => {
                    log::error!("order {} was not accepted: {}", payload.order_ref, e);
                    let err = OrderError::Delivery(e);
                    ctx.notify(NotificationKind::Error, err.user_message());
                }
            }
            this.is_submitting.set(false);
        });
    }
}

impl Default for OrderPageViewModel {
    fn default() -> Self {
        Self::new()
    }
}

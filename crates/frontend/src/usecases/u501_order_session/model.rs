use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a003_customer_order::{OrderPayload, OrderReceipt};
use contracts::system::session::SessionUser;
use contracts::usecases::u501_order_session::CatalogSnapshot;

/// Menu categories and items (GET /api/menu/catalog)
pub async fn fetch_catalog() -> Result<CatalogSnapshot, String> {
    get_json("/api/menu/catalog").await
}

/// Signed-in user as known to the backend (GET /api/session/me)
pub async fn fetch_current_user() -> Result<SessionUser, String> {
    get_json("/api/session/me").await
}

/// Hand a confirmed order to the backend (POST /api/orders)
pub async fn post_order(payload: &OrderPayload) -> Result<OrderReceipt, String> {
    post_json("/api/orders", payload).await
}

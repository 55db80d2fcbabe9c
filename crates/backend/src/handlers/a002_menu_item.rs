use axum::Json;
use contracts::usecases::u501_order_session::CatalogSnapshot;

use crate::domain::a002_menu_item;
use crate::shared::data::db::get_connection;

/// GET /api/menu/catalog
pub async fn get_catalog() -> Result<Json<CatalogSnapshot>, axum::http::StatusCode> {
    match a002_menu_item::service::load_catalog(get_connection()).await {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(e) => {
            tracing::error!("Failed to load catalog: {:#}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

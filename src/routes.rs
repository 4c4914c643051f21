use axum::{routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler, update_handler,
};
use crate::state::AppState;

// Route path constants - single source of truth for all API paths
pub const HEALTH: &str = "/health";
pub const PRODUCTS: &str = "/api/v1/products";
pub const PRODUCT: &str = "/api/v1/product";
pub const PRODUCT_ITEM: &str = "/api/v1/product/{id}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Assemble the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(health_handler))
        .route(PRODUCTS, get(list_handler))
        .route(PRODUCT, post(create_handler))
        .route(
            PRODUCT_ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

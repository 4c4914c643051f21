use crate::models::ProductListResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/v1/products handler - List every product
///
/// No filtering or pagination: the whole collection is returned in order.
#[utoipa::path(
    get,
    path = routes::PRODUCTS,
    responses(
        (status = 200, description = "All products", body = ProductListResponse)
    ),
    tag = "products"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ProductListResponse>) {
    let products = state.store.list().await;

    tracing::info!("Listed {} products", products.len());

    (StatusCode::OK, Json(ProductListResponse::new(products)))
}

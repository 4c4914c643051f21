use crate::models::ProductListResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /api/v1/product/{id} handler - Remove a product
///
/// Removes every product with the id and returns what remains. Deleting an
/// unknown id succeeds and leaves the collection as it was.
#[utoipa::path(
    delete,
    path = routes::PRODUCT_ITEM,
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 201, description = "Remaining products", body = ProductListResponse)
    ),
    tag = "products"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<ProductListResponse>) {
    let products = state.store.delete(&id).await;

    tracing::info!("Deleted product with id: {} ({} remaining)", id, products.len());

    (StatusCode::CREATED, Json(ProductListResponse::new(products)))
}

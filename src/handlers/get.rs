use crate::error::{ApiError, ErrorResponse};
use crate::models::ProductResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// GET /api/v1/product/{id} handler - Retrieve one product
#[utoipa::path(
    get,
    path = routes::PRODUCT_ITEM,
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "No product with that id", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    match state.store.get(&id).await {
        Some(product) => {
            tracing::info!("Retrieved product with id: {}", id);
            Ok((StatusCode::OK, Json(ProductResponse::new(product))))
        }
        None => {
            tracing::info!("Product not found with id: {}", id);
            Err(ApiError::NoProductFound)
        }
    }
}

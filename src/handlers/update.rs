use super::parse_payload;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{ProductListResponse, ProductPayload};
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Bytes, extract::rejection::BytesRejection, extract::Path, extract::State,
    http::StatusCode, Json,
};

/// PUT /api/v1/product/{id} handler - Partially update a product
///
/// Only the fields present in the body change. The response carries the
/// whole collection, not just the updated record.
#[utoipa::path(
    put,
    path = routes::PRODUCT_ITEM,
    params(
        ("id" = String, Path, description = "Product id")
    ),
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product updated, full collection returned", body = ProductListResponse),
        (status = 400, description = "No data or invalid JSON", body = ErrorResponse),
        (status = 404, description = "No product with that id", body = ErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ProductListResponse>), ApiError> {
    // An unknown id wins over a bad body
    if !state.store.contains(&id).await {
        tracing::info!("Product not found for update with id: {}", id);
        return Err(ApiError::ProductNotFound);
    }

    let body = body?;
    let payload = parse_payload(&body).inspect_err(|err| {
        tracing::info!("Rejected update of product {}: {}", id, err.message());
    })?;

    // The product may have been deleted between the check and the merge
    let products = state
        .store
        .update(&id, &payload)
        .await
        .ok_or(ApiError::ProductNotFound)?;

    tracing::info!("Updated product with id: {}", id);
    Ok((StatusCode::CREATED, Json(ProductListResponse::new(products))))
}

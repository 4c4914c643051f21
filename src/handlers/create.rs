use super::parse_payload;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{ProductPayload, ProductResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Bytes, extract::rejection::BytesRejection, extract::State, http::StatusCode, Json,
};

/// POST /api/v1/product handler - Create a product
///
/// The store assigns a fresh random id; any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = routes::PRODUCT,
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "No data or invalid JSON", body = ErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let body = body?;
    let payload = parse_payload(&body).inspect_err(|err| {
        tracing::info!("Rejected product creation: {}", err.message());
    })?;

    let product = state.store.create(payload).await;

    tracing::info!("Created product with id: {}", product.id);
    Ok((StatusCode::CREATED, Json(ProductResponse::new(product))))
}

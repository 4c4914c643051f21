use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub msg: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub products: usize,
}

/// Custom error type for API endpoints
///
/// Every variant is a client-side condition: handlers return it, the client
/// gets a `{success: false, msg}` body with the matching status, and the
/// process keeps serving.
#[derive(Debug)]
pub enum ApiError {
    /// Lookup by id found nothing
    NoProductFound,
    /// Update target does not exist
    ProductNotFound,
    /// Request body missing or carried no product fields
    NoData,
    /// Request body was not syntactically valid JSON
    JsonError(serde_json::Error),
    /// Request body was valid JSON but a field had the wrong type
    InvalidData(serde_json::Error),
    /// Request body could not be read, e.g. it exceeded the size limit
    BodyRejected(BytesRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoProductFound | ApiError::ProductNotFound => StatusCode::NOT_FOUND,
            ApiError::NoData | ApiError::JsonError(_) | ApiError::InvalidData(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::BodyRejected(rejection) => rejection.status(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::NoProductFound => "No product found".to_string(),
            ApiError::ProductNotFound => "Product not found".to_string(),
            ApiError::NoData => "No data".to_string(),
            ApiError::JsonError(err) => format!("Invalid JSON: {}", err),
            ApiError::InvalidData(err) => format!("Invalid product data: {}", err),
            ApiError::BodyRejected(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            success: false,
            msg: self.message(),
        });

        (self.status(), body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => ApiError::InvalidData(err),
            _ => ApiError::JsonError(err),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::BodyRejected(rejection)
    }
}

pub mod health;
pub mod list;
pub mod get;
pub mod create;
pub mod update;
pub mod delete;

pub use health::health_handler;
pub use list::list_handler;
pub use get::get_handler;
pub use create::create_handler;
pub use update::update_handler;
pub use delete::delete_handler;

use crate::error::ApiError;
use crate::models::ProductPayload;
use axum::body::Bytes;

/// Parse a create/update body, rejecting bodies that carry no product fields.
///
/// A missing body, JSON `null`, and an object with none of name, description
/// or price all count as "no data".
fn parse_payload(body: &Bytes) -> Result<ProductPayload, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::NoData);
    }

    let payload: Option<ProductPayload> = serde_json::from_slice(body)?;
    match payload {
        Some(payload) if !payload.is_empty() => Ok(payload),
        _ => Err(ApiError::NoData),
    }
}

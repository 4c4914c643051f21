use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{Product, ProductListResponse, ProductPayload, ProductResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "product-store-api",
        version = "1.0.0",
        description = "A minimal REST interface over an in-memory product collection seeded from a JSON file"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Product,
            ProductPayload,
            ProductResponse,
            ProductListResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "products", description = "Product collection operations")
    )
)]
pub struct ApiDoc;

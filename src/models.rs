use serde::{Deserialize, Serialize};

/// A single product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Build a new record from a create payload. Missing fields are left blank.
    pub fn from_payload(id: String, payload: ProductPayload) -> Self {
        Product {
            id,
            name: payload.name.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            price: payload.price.unwrap_or_default(),
        }
    }

    /// Shallow merge: only the fields present in the payload change.
    pub fn apply(&mut self, payload: &ProductPayload) {
        if let Some(name) = &payload.name {
            self.name = name.clone();
        }
        if let Some(description) = &payload.description {
            self.description = description.clone();
        }
        if let Some(price) = payload.price {
            self.price = price;
        }
    }
}

/// Request body for create and update. Any `id` sent by the caller is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl ProductPayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }
}

/// Response type for operations returning one product
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductResponse {
    pub success: bool,
    pub data: Product,
}

impl ProductResponse {
    pub fn new(data: Product) -> Self {
        Self { success: true, data }
    }
}

/// Response type for operations returning the whole collection
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductListResponse {
    pub success: bool,
    pub data: Vec<Product>,
}

impl ProductListResponse {
    pub fn new(data: Vec<Product>) -> Self {
        Self { success: true, data }
    }
}

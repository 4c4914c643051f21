use crate::store::ProductStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ProductStore,
}

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{Product, ProductPayload};

/// Shareable in-memory product collection for use across async handlers
///
/// The collection is seeded once at startup and mutated in place afterwards.
/// Nothing is ever written back to the seed file.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    inner: Arc<Mutex<Vec<Product>>>,
}

impl ProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(products)),
        }
    }

    /// Load the seed collection from a JSON array on disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON array of products
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read seed data from {}", path.display()))?;

        let products: Vec<Product> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse seed data in {}", path.display()))?;

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                tracing::warn!("Duplicate product id in seed data: {}", product.id);
            }
        }

        tracing::info!(
            "Loaded {} products from {}",
            products.len(),
            path.display()
        );

        Ok(Self::new(products))
    }

    pub async fn list(&self) -> Vec<Product> {
        self.inner.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn get(&self, id: &str) -> Option<Product> {
        self.inner
            .lock()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.inner.lock().await.iter().any(|p| p.id == id)
    }

    /// Append a new product built from the payload under a freshly generated id
    pub async fn create(&self, payload: ProductPayload) -> Product {
        let mut products = self.inner.lock().await;

        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !products.iter().any(|p| p.id == candidate) {
                break candidate;
            }
        };

        let product = Product::from_payload(id, payload);
        products.push(product.clone());
        product
    }

    /// Merge the payload onto every product with this id
    ///
    /// Returns the whole collection after the merge, or `None` if no product
    /// has the id.
    pub async fn update(&self, id: &str, payload: &ProductPayload) -> Option<Vec<Product>> {
        let mut products = self.inner.lock().await;

        let mut matched = false;
        for product in products.iter_mut().filter(|p| p.id == id) {
            product.apply(payload);
            matched = true;
        }

        matched.then(|| products.clone())
    }

    /// Drop every product with this id and return what remains
    ///
    /// An unknown id leaves the collection untouched.
    pub async fn delete(&self, id: &str) -> Vec<Product> {
        let mut products = self.inner.lock().await;
        products.retain(|p| p.id != id);
        products.clone()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    pub(crate) fn product(id: &str, name: &str, description: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }

    pub(crate) fn seed_store() -> ProductStore {
        ProductStore::new(vec![
            product("1", "Widget", "A small widget", 10.0),
            product("2", "Sprocket", "A toothed wheel", 4.5),
        ])
    }

    #[test]
    fn test_store_is_clonable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<ProductStore>();
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProductStore>();
    }

    #[tokio::test]
    async fn test_get_every_seeded_product() {
        let store = seed_store();
        for seeded in store.list().await {
            assert_eq!(store.get(&seeded.id).await, Some(seeded.clone()));
        }
        assert_eq!(store.get("missing").await, None);
    }

    #[tokio::test]
    async fn test_id_match_is_exact() {
        let store = seed_store();
        assert!(store.get("01").await.is_none());
        assert!(store.get(" 1").await.is_none());
        assert!(store.contains("1").await);
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let store = seed_store();
        let existing: Vec<String> = store.list().await.into_iter().map(|p| p.id).collect();

        let created = store
            .create(ProductPayload {
                name: Some("Gadget".to_string()),
                description: Some("Does things".to_string()),
                price: Some(5.0),
            })
            .await;

        assert!(!existing.contains(&created.id));
        assert!(Uuid::parse_str(&created.id).is_ok());
        assert_eq!(created.name, "Gadget");
        assert_eq!(created.description, "Does things");
        assert_eq!(created.price, 5.0);

        let all = store.list().await;
        assert_eq!(all.len(), 3);
        assert_eq!(all.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let store = seed_store();
        let payload = ProductPayload {
            price: Some(9.99),
            ..Default::default()
        };

        let all = store.update("1", &payload).await.unwrap();
        assert_eq!(all.len(), 2);

        let updated = store.get("1").await.unwrap();
        assert_eq!(updated.price, 9.99);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.description, "A small widget");

        // untouched neighbour
        assert_eq!(store.get("2").await.unwrap().price, 4.5);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = seed_store();
        let payload = ProductPayload {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };

        assert!(store.update("missing", &payload).await.is_none());
        assert_eq!(store.list().await, seed_store().list().await);
    }

    #[tokio::test]
    async fn test_delete_removes_all_matches() {
        let store = ProductStore::new(vec![
            product("1", "Widget", "", 1.0),
            product("2", "Sprocket", "", 2.0),
            product("1", "Widget copy", "", 3.0),
        ]);

        let remaining = store.delete("1").await;
        assert_eq!(remaining, vec![product("2", "Sprocket", "", 2.0)]);
        assert!(store.get("1").await.is_none());
    }

    #[tokio::test]
    async fn test_update_merges_all_duplicates() {
        let store = ProductStore::new(vec![
            product("1", "A", "", 1.0),
            product("1", "B", "", 2.0),
            product("2", "C", "", 3.0),
        ]);
        let payload = ProductPayload {
            price: Some(7.0),
            ..Default::default()
        };

        let all = store.update("1", &payload).await.unwrap();
        assert_eq!(
            all,
            vec![
                product("1", "A", "", 7.0),
                product("1", "B", "", 7.0),
                product("2", "C", "", 3.0),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let store = seed_store();
        let before = store.list().await;
        let after = store.delete("missing").await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "name": "Widget", "description": "A widget", "price": 10}}]"#
        )
        .unwrap();

        let store = ProductStore::load(file.path()).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("1").await.unwrap().price, 10.0);
    }

    #[tokio::test]
    async fn test_load_duplicate_ids_is_not_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "1", "name": "A", "description": "", "price": 1}},
                {{"id": "1", "name": "B", "description": "", "price": 2}}
            ]"#
        )
        .unwrap();

        let store = ProductStore::load(file.path()).await.unwrap();
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get("1").await.unwrap().name, "A");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ProductStore::load(&dir.path().join("nope.json")).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read seed data"));
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let result = ProductStore::load(file.path()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse seed data"));
    }
}

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Product;

/// Repository trait for Product storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product, assigning a generated id when the incoming one is blank
    async fn create(&self, product: Product) -> CatalogResult<Product>;

    /// Snapshot of all stored products in insertion order
    async fn find_all(&self) -> CatalogResult<Vec<Product>>;

    /// Look up a product by id
    async fn find_by_id(&self, id: &str) -> CatalogResult<Product>;

    /// Overwrite the name and quantity of the stored product with the same id
    async fn update(&self, product: Product) -> CatalogResult<Product>;

    /// Remove the product with this id. Returns false when nothing matched.
    async fn delete(&self, id: &str) -> CatalogResult<bool>;
}

/// In-memory implementation backed by a lock-guarded vector.
///
/// Products live for the lifetime of the repository instance and keep
/// their insertion order. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, mut product: Product) -> CatalogResult<Product> {
        if product.has_blank_id() {
            product.id = Uuid::new_v4().to_string();
        }

        let mut products = self.products.write().await;
        products.push(product.clone());
        drop(products);

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    async fn find_by_id(&self, id: &str) -> CatalogResult<Product> {
        let products = self.products.read().await;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    async fn update(&self, updated: Product) -> CatalogResult<Product> {
        if updated.has_blank_id() {
            return Err(CatalogError::InvalidArgument);
        }

        let mut products = self.products.write().await;
        let stored = products
            .iter_mut()
            .find(|p| p.id == updated.id)
            .ok_or_else(|| CatalogError::NotFound(updated.id.clone()))?;

        // Ids are immutable after creation; only name and quantity change
        stored.name = updated.name;
        stored.quantity = updated.quantity;
        let result = stored.clone();
        drop(products);

        tracing::info!(product_id = %result.id, "Updated product");
        Ok(result)
    }

    async fn delete(&self, id: &str) -> CatalogResult<bool> {
        let mut products = self.products.write().await;

        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                drop(products);
                tracing::info!(product_id = %id, "Deleted product");
                Ok(true)
            }
            // Deleting an id that is not stored is a no-op, not an error
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampo() -> Product {
        Product::new(
            "eb558e9f-1c39-460e-8860-71af6af63bd6",
            "Sampo Cap Bambang",
            100,
        )
    }

    #[tokio::test]
    async fn test_create_and_find_all() {
        let repo = InMemoryProductRepository::new();

        let created = repo.create(sampo()).await.unwrap();
        assert_eq!(created, sampo());

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], sampo());
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryProductRepository::new();
        repo.create(Product::new("a", "First", 1)).await.unwrap();
        repo.create(Product::new("b", "Second", 2)).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all[0].id, "a");
        assert_eq!(all[1].id, "b");
    }

    #[tokio::test]
    async fn test_create_assigns_id_when_blank() {
        let repo = InMemoryProductRepository::new();

        let created = repo
            .create(Product::new("", "Sampo Cap Bambang", 100))
            .await
            .unwrap();

        assert!(Uuid::parse_str(&created.id).is_ok());
        assert_eq!(repo.find_all().await.unwrap()[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_assigns_id_when_whitespace() {
        let repo = InMemoryProductRepository::new();

        let created = repo.create(Product::new("   ", "Soap", 1)).await.unwrap();

        assert!(Uuid::parse_str(&created.id).is_ok());
    }

    #[tokio::test]
    async fn test_create_keeps_caller_id_verbatim() {
        let repo = InMemoryProductRepository::new();

        let created = repo.create(Product::new("p1", "Soap", 1)).await.unwrap();

        assert_eq!(created.id, "p1");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryProductRepository::new();
        repo.create(sampo()).await.unwrap();

        let found = repo
            .find_by_id("eb558e9f-1c39-460e-8860-71af6af63bd6")
            .await
            .unwrap();

        assert_eq!(found, sampo());
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let repo = InMemoryProductRepository::new();

        let err = repo.find_by_id("missing-id").await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Product with Id + missing-id was not found."
        );
    }

    #[tokio::test]
    async fn test_update_overwrites_name_and_quantity() {
        let repo = InMemoryProductRepository::new();
        repo.create(sampo()).await.unwrap();

        let updated = repo
            .update(Product::new(
                "eb558e9f-1c39-460e-8860-71af6af63bd6",
                "Sampo Cap Bambang Edition",
                200,
            ))
            .await
            .unwrap();

        assert_eq!(updated.name, "Sampo Cap Bambang Edition");
        assert_eq!(updated.quantity, 200);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Sampo Cap Bambang Edition");
        assert_eq!(all[0].quantity, 200);
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let repo = InMemoryProductRepository::new();

        let err = repo
            .update(Product::new("missing-id", "Soap", 1))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::NotFound(id) if id == "missing-id"));
    }

    #[tokio::test]
    async fn test_update_blank_id_is_rejected() {
        let repo = InMemoryProductRepository::new();

        let err = repo.update(Product::new("", "Soap", 1)).await.unwrap_err();

        assert_eq!(err.to_string(), "Product and Product Id must not be null.");
    }

    #[tokio::test]
    async fn test_delete_removes_product() {
        let repo = InMemoryProductRepository::new();
        repo.create(sampo()).await.unwrap();

        let deleted = repo
            .delete("eb558e9f-1c39-460e-8860-71af6af63bd6")
            .await
            .unwrap();

        assert!(deleted);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_silent() {
        let repo = InMemoryProductRepository::new();
        repo.create(sampo()).await.unwrap();

        let deleted = repo.delete("missing-id").await.unwrap();

        assert!(!deleted);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}

use std::sync::Arc;

use crate::error::CatalogResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Service layer for product catalog operations.
///
/// The catalog carries no business rules beyond id assignment, which lives
/// at the repository boundary, so every operation delegates directly.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    pub async fn create_product(&self, product: Product) -> CatalogResult<Product> {
        self.repository.create(product).await
    }

    /// List all products in insertion order
    pub async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Get a product by id
    pub async fn find_by_id(&self, id: &str) -> CatalogResult<Product> {
        self.repository.find_by_id(id).await
    }

    /// Update a product's name and quantity
    pub async fn update_product(&self, product: Product) -> CatalogResult<Product> {
        self.repository.update(product).await
    }

    /// Delete a product. Deleting one that is no longer stored is a no-op.
    pub async fn delete_product(&self, product: &Product) -> CatalogResult<()> {
        self.repository.delete(&product.id).await?;
        Ok(())
    }
}

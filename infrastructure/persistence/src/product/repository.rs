use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::ranking;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

/// Catalog kept in memory for the lifetime of the process.
///
/// Products live in a vector in catalog order; `index` maps each id to its
/// slot and never changes after construction.
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
    index: HashMap<ProductId, usize>,
}

impl InMemoryProductRepository {
    /// Fails with [`RepositoryError::Duplicated`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, RepositoryError> {
        let mut index = HashMap::with_capacity(products.len());
        for (slot, product) in products.iter().enumerate() {
            if index.insert(product.id, slot).is_some() {
                return Err(RepositoryError::duplicated());
            }
        }

        Ok(Self {
            products: RwLock::new(products),
            index,
        })
    }

    fn slot(&self, id: ProductId) -> Result<usize, RepositoryError> {
        self.index
            .get(&id)
            .copied()
            .ok_or_else(RepositoryError::not_found)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| p.is_in_category(category))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let slot = self.slot(id)?;
        let products = self.products.read().await;
        Ok(products[slot].clone())
    }

    async fn get_most_used(&self, limit: usize) -> Result<Vec<Product>, RepositoryError> {
        let snapshot = self.products.read().await.clone();
        Ok(ranking::most_used(snapshot, limit))
    }

    async fn record_usage(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let slot = self.slot(id)?;
        let mut products = self.products.write().await;
        let product = &mut products[slot];
        product.usage_count += 1;
        Ok(product.clone())
    }
}

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn get_most_used(&self, limit: usize) -> Result<Vec<Product>, RepositoryError>;
    /// Increments the stored product's usage count in place and returns
    /// the updated product.
    async fn record_usage(&self, id: ProductId) -> Result<Product, RepositoryError>;
}

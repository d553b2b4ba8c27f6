use crate::domain::product::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("product with id {0} was not found")]
    ProductNotFound(ProductId),
    /// `unit` is the symbol as the caller sent it, which may not name any
    /// known unit at all.
    #[error("product {product} is not available in unit {unit}")]
    InvalidUnit { product: String, unit: String },
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

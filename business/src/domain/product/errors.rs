use super::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.no_available_units")]
    NoAvailableUnits,
    #[error("product with id {0} was not found")]
    NotFound(ProductId),
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

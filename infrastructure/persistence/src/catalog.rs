use thiserror::Error;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::{ProductId, Unit};

use crate::product::repository::InMemoryProductRepository;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog.invalid_product: {0}")]
    InvalidProduct(#[from] ProductError),
    #[error("catalog.repository: {0}")]
    Repository(#[from] RepositoryError),
}

/// Products the service starts with.
pub fn sample_catalog() -> Result<Vec<Product>, ProductError> {
    let seed: [(i64, &str, &str, &[Unit]); 6] = [
        (1, "Mleko", "nabiał", &[Unit::Liter, Unit::Milliliter]),
        (2, "Ser żółty", "nabiał", &[Unit::Kilogram, Unit::Gram]),
        (3, "Jogurt naturalny", "nabiał", &[Unit::Piece, Unit::Gram]),
        (4, "Pomidor", "warzywa", &[Unit::Piece, Unit::Kilogram]),
        (5, "Ogórek", "warzywa", &[Unit::Piece, Unit::Kilogram]),
        (6, "Chleb", "pieczywo", &[Unit::Piece]),
    ];

    seed.into_iter()
        .map(|(id, name, category, units)| {
            Product::new(NewProductProps {
                id: ProductId::new(id),
                name: name.to_string(),
                category: category.to_string(),
                available_units: units.to_vec(),
            })
        })
        .collect()
}

impl InMemoryProductRepository {
    /// Creates a repository loaded with [`sample_catalog`].
    pub fn seeded() -> Result<Self, CatalogError> {
        Ok(Self::new(sample_catalog()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_seed_six_products_across_three_categories() {
        let products = sample_catalog().unwrap();

        assert_eq!(products.len(), 6);
        let mut categories: Vec<&str> = products.iter().map(|p| p.category.as_str()).collect();
        categories.dedup();
        assert_eq!(categories, vec!["nabiał", "warzywa", "pieczywo"]);
    }

    #[test]
    fn should_seed_every_product_unused() {
        let products = sample_catalog().unwrap();

        assert!(products.iter().all(|p| p.usage_count == 0));
        assert!(products.iter().all(|p| !p.available_units.is_empty()));
    }

    #[test]
    fn should_build_seeded_repository() {
        assert!(InMemoryProductRepository::seeded().is_ok());
    }
}

use super::errors::ProductError;
use super::value_objects::{ProductId, Unit};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub available_units: Vec<Unit>,
    pub usage_count: u64,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub available_units: Vec<Unit>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.available_units.is_empty() {
            return Err(ProductError::NoAvailableUnits);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            category: props.category,
            available_units: props.available_units,
            usage_count: 0,
        })
    }

    /// Returns true if the product can be put on the list in `unit`.
    pub fn supports(&self, unit: Unit) -> bool {
        self.available_units.contains(&unit)
    }

    /// Case-insensitive category comparison (Unicode aware).
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

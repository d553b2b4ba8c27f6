use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum UnitDto {
    #[oai(rename = "szt.")]
    #[serde(rename = "szt.")]
    Piece,
    #[oai(rename = "kg")]
    #[serde(rename = "kg")]
    Kilogram,
    #[oai(rename = "g")]
    #[serde(rename = "g")]
    Gram,
    #[oai(rename = "l")]
    #[serde(rename = "l")]
    Liter,
    #[oai(rename = "ml")]
    #[serde(rename = "ml")]
    Milliliter,
}

impl From<Unit> for UnitDto {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Piece => UnitDto::Piece,
            Unit::Kilogram => UnitDto::Kilogram,
            Unit::Gram => UnitDto::Gram,
            Unit::Liter => UnitDto::Liter,
            Unit::Milliliter => UnitDto::Milliliter,
        }
    }
}

/// Catalog product as exposed to clients. Usage count stays internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Category label
    pub category: String,
    /// Units the product can be added to the list in
    pub available_units: Vec<UnitDto>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            category: product.category,
            available_units: product
                .available_units
                .into_iter()
                .map(UnitDto::from)
                .collect(),
        }
    }
}

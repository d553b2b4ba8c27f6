use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::value_objects::{ProductId, Unit};

/// Quantity recorded for every item added to the list.
pub const DEFAULT_QUANTITY: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub product_id: ProductId,
    pub quantity: f64,
    pub unit: Unit,
    pub added_at: DateTime<Utc>,
}

impl ShoppingItem {
    pub fn new(product_id: ProductId, unit: Unit) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            quantity: DEFAULT_QUANTITY,
            unit,
            added_at: Utc::now(),
        }
    }
}

/// Append-only list of items, kept in insertion order.
#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ShoppingItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

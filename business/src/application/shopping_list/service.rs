use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::Unit;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{DEFAULT_QUANTITY, ShoppingItem, ShoppingList};
use crate::domain::shopping_list::use_cases::add_product::{
    AddProductToListParams, AddProductToListUseCase,
};
use crate::domain::shopping_list::use_cases::get_all::GetShoppingListUseCase;

/// Owns the shopping list and records product usage against the shared
/// catalog.
///
/// The list lock is held for the whole of an add, and usage is only ever
/// recorded from inside it, so list appends and usage counters move together.
pub struct ShoppingService {
    repository: Arc<dyn ProductRepository>,
    logger: Arc<dyn Logger>,
    list: Mutex<ShoppingList>,
}

impl ShoppingService {
    pub fn new(repository: Arc<dyn ProductRepository>, logger: Arc<dyn Logger>) -> Self {
        Self {
            repository,
            logger,
            list: Mutex::new(ShoppingList::new()),
        }
    }
}

#[async_trait]
impl AddProductToListUseCase for ShoppingService {
    async fn execute(
        &self,
        params: AddProductToListParams,
    ) -> Result<Product, ShoppingListError> {
        let mut list = self.list.lock().await;

        let product = self
            .repository
            .find_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::ProductNotFound(params.product_id),
                other => ShoppingListError::Repository(other),
            })?;

        let unit = match params.unit.parse::<Unit>() {
            Ok(unit) if product.supports(unit) => unit,
            _ => {
                self.logger.warn(&format!(
                    "Rejected unit {} for product {}",
                    params.unit, product.name
                ));
                return Err(ShoppingListError::InvalidUnit {
                    product: product.name,
                    unit: params.unit,
                });
            }
        };

        if let Some(quantity) = params.requested_quantity
            && quantity != DEFAULT_QUANTITY
        {
            self.logger.debug(&format!(
                "Ignoring requested quantity {} for product {}",
                quantity, product.id
            ));
        }

        list.push(ShoppingItem::new(product.id, unit));
        let product = self.repository.record_usage(product.id).await?;

        self.logger.info(&format!(
            "Added product {} to the shopping list ({} items, used {} times)",
            product.id,
            list.len(),
            product.usage_count
        ));
        Ok(product)
    }
}

#[async_trait]
impl GetShoppingListUseCase for ShoppingService {
    async fn execute(&self) -> Result<Vec<ShoppingItem>, ShoppingListError> {
        let list = self.list.lock().await;
        self.logger
            .info(&format!("Retrieved {} shopping list items", list.len()));
        Ok(list.items().to_vec())
    }
}

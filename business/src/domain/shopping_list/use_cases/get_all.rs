use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingItem;

#[async_trait]
pub trait GetShoppingListUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ShoppingItem>, ShoppingListError>;
}

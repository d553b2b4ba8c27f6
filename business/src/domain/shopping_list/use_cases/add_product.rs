use async_trait::async_trait;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct AddProductToListParams {
    pub product_id: ProductId,
    /// Unit symbol as received (e.g. `"l"`); resolved against the product
    /// after the product itself is found.
    pub unit: String,
    /// Accepted from callers but not applied: items are always recorded
    /// with a quantity of one.
    pub requested_quantity: Option<f64>,
}

#[async_trait]
pub trait AddProductToListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddProductToListParams,
    ) -> Result<Product, ShoppingListError>;
}

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetMostUsedProductsParams {
    pub limit: usize,
}

#[async_trait]
pub trait GetMostUsedProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetMostUsedProductsParams,
    ) -> Result<Vec<Product>, ProductError>;
}

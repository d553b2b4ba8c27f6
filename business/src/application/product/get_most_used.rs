use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_most_used::{
    GetMostUsedProductsParams, GetMostUsedProductsUseCase,
};

pub struct GetMostUsedProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMostUsedProductsUseCase for GetMostUsedProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetMostUsedProductsParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Fetching {} most used products", params.limit));
        let products = self.repository.get_most_used(params.limit).await?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::{ProductId, Unit};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn get_most_used(&self, limit: usize) -> Result<Vec<Product>, RepositoryError>;
            async fn record_usage(&self, id: ProductId) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_forward_limit_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_most_used()
            .withf(|limit| *limit == 2)
            .times(1)
            .returning(|_| {
                Ok(vec![Product {
                    id: ProductId::new(3),
                    name: "Jogurt naturalny".to_string(),
                    category: "nabiał".to_string(),
                    available_units: vec![Unit::Piece, Unit::Gram],
                    usage_count: 4,
                }])
            });

        let use_case = GetMostUsedProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetMostUsedProductsParams { limit: 2 })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].usage_count, 4);
    }
}

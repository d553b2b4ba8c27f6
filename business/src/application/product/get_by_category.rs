use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};

pub struct GetProductsByCategoryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryUseCase for GetProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching products in category: {}",
            params.category
        ));
        let products = self.repository.get_by_category(&params.category).await?;
        self.logger.info(&format!(
            "Found {} products in category {}",
            products.len(),
            params.category
        ));
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
    async fn should_pass_category_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_category()
            .withf(|category| category == "pieczywo")
            .times(1)
            .returning(|_| {
                Ok(vec![Product {
                    id: ProductId::new(6),
                    name: "Chleb".to_string(),
                    category: "pieczywo".to_string(),
                    available_units: vec![Unit::Piece],
                    usage_count: 0,
                }])
            });

        let use_case = GetProductsByCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetProductsByCategoryParams {
                category: "pieczywo".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Chleb");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_category_unknown() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_category().returning(|_| Ok(vec![]));

        let use_case = GetProductsByCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductsByCategoryParams {
                category: "słodycze".to_string(),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }
}

use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::InMemoryProductRepository;

use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_most_used::GetMostUsedProductsUseCaseImpl;
use business::application::shopping_list::service::ShoppingService;

use crate::api::health::routes::HealthApi;
use crate::api::help::routes::HelpApi;
use crate::api::product::routes::ProductApi;
use crate::api::shopping_list::routes::ShoppingListApi;
use crate::config::listing_config::ListingConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub help_api: HelpApi,
    pub product_api: ProductApi,
    pub shopping_list_api: ShoppingListApi,
}

impl DependencyContainer {
    pub fn new(listing: &ListingConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(InMemoryProductRepository::seeded()?);

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_category_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_most_used_use_case = Arc::new(GetMostUsedProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Shopping list: one service instance backs both endpoints
        let shopping_service = Arc::new(ShoppingService::new(product_repository, logger));

        let product_api = ProductApi::new(
            get_all_use_case,
            get_by_category_use_case,
            get_by_id_use_case,
            get_most_used_use_case,
            listing.most_used_default_limit,
        );

        let shopping_list_api = ShoppingListApi::new(shopping_service.clone(), shopping_service);

        Ok(Self {
            health_api: HealthApi,
            help_api: HelpApi,
            product_api,
            shopping_list_api,
        })
    }
}

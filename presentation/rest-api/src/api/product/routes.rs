use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_most_used::{
    GetMostUsedProductsParams, GetMostUsedProductsUseCase,
};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_most_used_use_case: Arc<dyn GetMostUsedProductsUseCase>,
    default_most_used_limit: usize,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_most_used_use_case: Arc<dyn GetMostUsedProductsUseCase>,
        default_most_used_limit: usize,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_category_use_case,
            get_by_id_use_case,
            get_most_used_use_case,
            default_most_used_limit,
        }
    }
}

/// Falls back to `default` unless `raw` is a positive integer.
fn resolve_limit(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|l| l.parse::<usize>().ok())
        .filter(|l| *l > 0)
        .unwrap_or(default)
}

/// Product catalog API
///
/// Read-only queries over the product catalog.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Returns the whole catalog, or only the products of `category`
    /// (matched case-insensitively) when given.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(&self, category: Query<Option<String>>) -> GetProductsResponse {
        let result = match category.0.filter(|c| !c.is_empty()) {
            Some(category) => {
                self.get_by_category_use_case
                    .execute(GetProductsByCategoryParams { category })
                    .await
            }
            None => self.get_all_use_case.execute().await,
        };

        match result {
            Ok(products) => GetProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductsResponse::InternalError(json)
            }
        }
    }

    /// List most used products
    ///
    /// Returns products ordered by how often they were added to the shopping
    /// list. `limit` defaults to the configured value when missing, not a
    /// number, or not positive.
    #[oai(
        path = "/products/most-used",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_most_used(&self, limit: Query<Option<String>>) -> GetProductsResponse {
        let limit = resolve_limit(limit.0.as_deref(), self.default_most_used_limit);

        match self
            .get_most_used_use_case
            .execute(GetMostUsedProductsParams { limit })
            .await
        {
            Ok(products) => GetProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "invalid_product_id")]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn invalid_product_id(_err: poem::Error) -> GetProductByIdResponse {
    GetProductByIdResponse::BadRequest(ErrorResponse::new("product id must be an integer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_given_positive_limit() {
        assert_eq!(resolve_limit(Some("5"), 3), 5);
    }

    #[test]
    fn should_default_when_limit_missing() {
        assert_eq!(resolve_limit(None, 3), 3);
    }

    #[test]
    fn should_default_when_limit_not_positive_or_not_numeric() {
        assert_eq!(resolve_limit(Some("0"), 3), 3);
        assert_eq!(resolve_limit(Some("-4"), 3), 3);
        assert_eq!(resolve_limit(Some("abc"), 3), 3);
        assert_eq!(resolve_limit(Some(""), 3), 3);
    }
}

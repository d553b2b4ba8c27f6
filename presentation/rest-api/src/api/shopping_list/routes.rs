use std::sync::Arc;

use poem::Body;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::value_objects::ProductId;
use business::domain::shopping_list::errors::ShoppingListError;
use business::domain::shopping_list::use_cases::add_product::{
    AddProductToListParams, AddProductToListUseCase,
};
use business::domain::shopping_list::use_cases::get_all::GetShoppingListUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::shopping_list::dto::{
    AddToShoppingListRequest, MessageResponse, ShoppingItemResponse,
};
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    add_use_case: Arc<dyn AddProductToListUseCase>,
    get_all_use_case: Arc<dyn GetShoppingListUseCase>,
}

impl ShoppingListApi {
    pub fn new(
        add_use_case: Arc<dyn AddProductToListUseCase>,
        get_all_use_case: Arc<dyn GetShoppingListUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            get_all_use_case,
        }
    }
}

/// Shopping list API
///
/// Endpoints for appending products to the in-memory shopping list.
#[OpenApi]
impl ShoppingListApi {
    /// List shopping list items
    ///
    /// Returns every item added so far, oldest first.
    #[oai(path = "/shopping-list", method = "get", tag = "ApiTags::ShoppingList")]
    async fn get_all(&self) -> GetShoppingListResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => GetShoppingListResponse::Ok(Json(
                items.into_iter().map(ShoppingItemResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetShoppingListResponse::InternalError(json)
            }
        }
    }

    /// Add a product to the shopping list
    ///
    /// Expects a JSON object with `ProductID`, `Unit` and an optional
    /// `Quantity`. The body is decoded whatever its content type. The unit must
    /// be one of the product's available units. Each successful add bumps the
    /// product's usage count.
    #[oai(
        path = "/shopping-list/add",
        method = "post",
        tag = "ApiTags::ShoppingList"
    )]
    async fn add(&self, body: Body) -> AddToShoppingListResponse {
        let bytes = match body.into_bytes().await {
            Ok(bytes) => bytes,
            Err(err) => return malformed_body(err),
        };
        let request = match AddToShoppingListRequest::from_json(&bytes) {
            Ok(request) => request,
            Err(err) => return malformed_body(err),
        };

        let params = AddProductToListParams {
            product_id: ProductId::new(request.product_id()),
            unit: request.unit().to_string(),
            requested_quantity: request.quantity(),
        };

        match self.add_use_case.execute(params).await {
            Ok(product) => AddToShoppingListResponse::Created(Json(MessageResponse {
                message: format!("Added '{}' to the shopping list", product.name),
            })),
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShoppingListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "malformed_request")]
pub enum AddToShoppingListResponse {
    #[oai(status = 201)]
    Created(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ShoppingListError> for AddToShoppingListResponse {
    fn from(err: ShoppingListError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => AddToShoppingListResponse::BadRequest(json),
            404 => AddToShoppingListResponse::NotFound(json),
            _ => AddToShoppingListResponse::InternalError(json),
        }
    }
}

fn malformed_request(err: poem::Error) -> AddToShoppingListResponse {
    malformed_body(err)
}

fn malformed_body(err: impl std::fmt::Display) -> AddToShoppingListResponse {
    tracing::warn!(error = %err, "Rejected malformed shopping list request");
    AddToShoppingListResponse::BadRequest(ErrorResponse::new("malformed JSON body"))
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ShoppingListError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            ShoppingListError::InvalidUnit { .. } => StatusCode::BAD_REQUEST,
            ShoppingListError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, ErrorResponse::new(self.to_string()))
    }
}

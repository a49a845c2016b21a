use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShoppingListError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "shopping_list.not_found")
            }
            ShoppingListError::ItemNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "shopping_list.item_not_found",
            ),
            ShoppingListError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_list.name_empty",
            ),
            ShoppingListError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_list.invalid_price",
            ),
            ShoppingListError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_list.invalid_quantity",
            ),
            ShoppingListError::Repository(err) => {
                tracing::error!("Shopping list storage failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        };

        (status, ErrorResponse::json(name, message))
    }
}

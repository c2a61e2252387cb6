//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

pub(crate) fn cart_item_not_found() -> StatusError {
    StatusError::not_found().brief("Cart item not found")
}

pub(crate) fn invalid_quantity() -> StatusError {
    StatusError::bad_request().brief("Quantity must be greater than 0")
}

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => cart_item_not_found(),
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::InvalidQuantity => invalid_quantity(),
        CartsServiceError::MissingRequiredData | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart item")
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error().brief(source.to_string())
        }
    }
}

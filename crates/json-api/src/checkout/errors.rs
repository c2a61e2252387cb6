//! Checkout Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::checkout::CheckoutServiceError;

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::InvalidCustomer => {
            StatusError::bad_request().brief("Customer name and email are required")
        }
        CheckoutServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        CheckoutServiceError::Sql(source) => {
            error!("checkout storage error: {source}");

            StatusError::internal_server_error().brief(source.to_string())
        }
    }
}

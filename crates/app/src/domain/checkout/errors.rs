//! Checkout service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("customer name and email are required")]
    InvalidCustomer,

    #[error("cart is empty")]
    EmptyCart,

    #[error("storage error: {0}")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for CheckoutServiceError {
    fn from(error: sqlx::Error) -> Self {
        Self::Sql(error)
    }
}

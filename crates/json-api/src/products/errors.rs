//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

/// Reading the catalog has no client-caused failures, so every error is a 500.
pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    let message = match &error {
        ProductsServiceError::Sql(source) => source.to_string(),
        other => other.to_string(),
    };

    error!("failed to read product catalog: {error}");

    StatusError::internal_server_error().brief(message)
}

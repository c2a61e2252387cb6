//! Depot accessors for handlers.

use salvo::prelude::{Depot, StatusError};

use storefront_app::context::AppContext;

pub(crate) trait DepotExt {
    /// The storefront services injected by the router, or a 500 when they are missing.
    fn storefront(&self) -> Result<&AppContext, StatusError>;
}

impl DepotExt for Depot {
    fn storefront(&self) -> Result<&AppContext, StatusError> {
        self.obtain::<AppContext>().map_err(|_ignored| {
            tracing::error!("storefront services were not injected into the depot");

            StatusError::internal_server_error().brief("application state is not available")
        })
    }
}

//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        checkout::{CheckoutService, PgCheckoutService},
        products::{
            PgProductsService, ProductsService, ProductsServiceError, catalog::default_catalog,
        },
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),

    #[error("failed to seed product catalog")]
    Seed(#[source] ProductsServiceError),
}

/// What to do to the database before serving.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupOptions {
    pub run_migrations: bool,
    pub seed_catalog: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppContext {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            checkout: Arc::new(PgCheckoutService::new(db)),
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting, migrating or seeding fails.
    pub async fn from_database_url(
        url: &str,
        options: StartupOptions,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if options.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;

            info!("database migrations applied");
        }

        let context = Self::new(Db::new(pool));

        if options.seed_catalog {
            context
                .products
                .seed_products(default_catalog())
                .await
                .map_err(AppInitError::Seed)?;
        }

        Ok(context)
    }
}

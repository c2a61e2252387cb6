//! Database and catalog bootstrap settings.

use clap::{ArgAction, Args};

use storefront_app::context::StartupOptions;

#[derive(Debug, Args)]
pub struct StorageConfig {
    /// `PostgreSQL` connection string.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Apply pending migrations before serving.
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = true, action = ArgAction::Set)]
    pub run_migrations: bool,

    /// Insert the default products when the catalog is empty.
    #[arg(long, env = "SEED_CATALOG", default_value_t = true, action = ArgAction::Set)]
    pub seed_catalog: bool,
}

impl StorageConfig {
    #[must_use]
    pub fn startup_options(&self) -> StartupOptions {
        StartupOptions {
            run_migrations: self.run_migrations,
            seed_catalog: self.seed_catalog,
        }
    }
}

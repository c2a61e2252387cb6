//! Server configuration, read from the command line, the environment and `.env`.

use clap::Parser;

use crate::config::{
    http::HttpConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    storage::StorageConfig,
};

pub(crate) mod http;
pub(crate) mod observability;
pub(crate) mod storage;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    #[command(flatten)]
    pub http: HttpConfig,

    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(flatten)]
    pub observability: ObservabilityConfig,

    #[command(flatten)]
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Parse arguments after loading `.env`, which never overrides variables already set.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

//! Storefront JSON API Server

use std::process;

use salvo::{http::header::InvalidHeaderValue, prelude::*};
use thiserror::Error;
use tracing::{error, info};

use storefront_app::context::{AppContext, AppInitError};

use crate::{
    config::ServerConfig,
    observability::{Observability, RequestLogging},
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod carts;
mod checkout;
mod config;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod router;
mod shutdown;
#[cfg(test)]
mod test_helpers;

#[derive(Debug, Error)]
enum StartupError {
    #[error("invalid CORS allowed origin: {0}")]
    Cors(#[from] InvalidHeaderValue),

    #[error("failed to initialize app context: {0}")]
    App(#[from] AppInitError),
}

/// Storefront JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging not initialized yet, must use eprintln for config errors"
            )]
            {
                eprintln!("Configuration error: {e}");
            }

            process::exit(1);
        }
    };

    let observability = match Observability::init(&config) {
        Ok(observability) => observability,
        Err(e) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging could not be initialized, must use eprintln"
            )]
            {
                eprintln!("Observability error: {e}");
            }

            process::exit(1);
        }
    };

    let result = run(config).await;

    if let Err(startup_error) = &result {
        error!("{startup_error}");
    }

    observability.shutdown();

    if result.is_err() {
        process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let cors = router::cors(&config.http.cors_allowed_origin)?;

    let app = AppContext::from_database_url(
        &config.storage.database_url,
        config.storage.startup_options(),
    )
    .await?;

    let addr = config.http.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    let request_logging = RequestLogging::new(&config.observability);

    server
        .serve(router::service(app, cors, request_logging))
        .await;

    info!("server stopped");

    Ok(())
}

//! HTTP listener and CORS settings.

use clap::Args;

#[derive(Debug, Args)]
pub struct HttpConfig {
    /// Interface to bind.
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Origin allowed to call the API, or `*` for any origin.
    #[arg(long, env = "CORS_ALLOWED_ORIGIN", default_value = "*")]
    pub cors_allowed_origin: String,
}

impl HttpConfig {
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

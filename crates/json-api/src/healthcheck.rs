//! Liveness probe.

use salvo::{oapi::ToSchema, prelude::*};
use serde::Serialize;

/// Liveness report.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Always `ok` while the process can answer.
    status: &'static str,
}

/// Report that the server is accepting requests. The database is not consulted.
#[endpoint(tags("health"), summary = "Liveness probe")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

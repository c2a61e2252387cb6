//! Request logging middleware.
//!
//! Every API request gets an `x-request-id`, an `http.request` span, one
//! `request.completed` event and a metrics observation. 4xx responses log a
//! warning, 5xx responses log an error, and requests slower than the configured
//! threshold log a warning. `/metrics` and `/healthcheck` pass straight through.

mod ids;
mod routes;

use std::time::{Duration, Instant};

use salvo::{
    handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Request, Response},
};
use tracing::{Instrument as _, error, info, warn};

use crate::config::observability::ObservabilityConfig;

use super::metrics;

/// Request logging hoop configured with the slow request threshold.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogging {
    slow_request_threshold: Duration,
}

impl RequestLogging {
    pub(crate) fn new(config: &ObservabilityConfig) -> Self {
        Self::with_threshold(Duration::from_millis(config.slow_request_threshold_ms))
    }

    pub(crate) const fn with_threshold(slow_request_threshold: Duration) -> Self {
        Self {
            slow_request_threshold,
        }
    }

    fn log_completion(&self, method: &str, path: &str, status: StatusCode, elapsed: Duration) {
        let status_code = status.as_u16();
        let duration_ms = elapsed.as_millis();

        info!(status = status_code, duration_ms, "request.completed");

        if status.is_server_error() {
            error!(status = status_code, method, path, "server error response");
        } else if status.is_client_error() {
            warn!(status = status_code, method, path, "client error response");
        }

        if elapsed > self.slow_request_threshold {
            warn!(
                method,
                path,
                duration_ms,
                threshold_ms = self.slow_request_threshold.as_millis(),
                "slow request detected"
            );
        }
    }
}

fn is_operational(path: &str) -> bool {
    matches!(path, "/metrics" | "/healthcheck")
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        if is_operational(req.uri().path()) {
            ctrl.call_next(req, depot, res).await;
            return;
        }

        let started = Instant::now();

        let request_id = ids::resolve(req.header::<String>(ids::REQUEST_ID_HEADER));

        ids::echo(res, &request_id);

        let method = req.method().as_str().to_owned();
        let path = req.uri().path().to_owned();
        let route = routes::route_label(&path);
        let span_name = format!("{method} {route}");
        let _in_flight = metrics::track_in_flight();

        let span = tracing::info_span!(
            parent: None,
            "http.request",
            otel.name = %span_name,
            otel.kind = "server",
            request_id = %request_id,
            method = %method,
            path = %path,
            remote_addr = %req.remote_addr(),
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let elapsed = started.elapsed();
        let status = res.status_code.unwrap_or(StatusCode::OK);

        metrics::observe(&method, &route, status, elapsed);

        span.record("status", status.as_u16());
        span.record("duration_ms", elapsed.as_millis());

        span.in_scope(|| self.log_completion(&method, &path, status, elapsed));
    }
}

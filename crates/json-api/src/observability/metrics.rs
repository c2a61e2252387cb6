//! Prometheus HTTP metrics and the `/metrics` exposition handler.

use std::{sync::LazyLock, time::Duration};

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use salvo::{
    Response, handler,
    http::{StatusCode, header::CONTENT_TYPE},
};
use tracing::error;

const NAMESPACE: &str = "storefront_json";

const DURATION_BUCKETS: [f64; 13] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

static HTTP_METRICS: LazyLock<Option<HttpMetrics>> = LazyLock::new(|| {
    HttpMetrics::register()
        .inspect_err(|source| error!("failed to register HTTP metrics: {source}"))
        .ok()
});

#[derive(Debug)]
struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
}

impl HttpMetrics {
    fn register() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some(NAMESPACE.to_owned()), None)?;

        let requests_total = IntCounterVec::new(
            Opts::new(
                "http_requests_total",
                "HTTP requests by method, route, status class and status code.",
            ),
            &["method", "route", "status_class", "status_code"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request latency in seconds by method and route.",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route"],
        )?;

        let requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "HTTP requests currently being served.",
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;
        registry.register(Box::new(requests_in_flight.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
        })
    }
}

/// Keeps the in-flight gauge raised until dropped.
#[derive(Debug)]
pub(super) struct InFlight(&'static IntGauge);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.dec();
    }
}

pub(super) fn track_in_flight() -> Option<InFlight> {
    let gauge = &HTTP_METRICS.as_ref()?.requests_in_flight;

    gauge.inc();

    Some(InFlight(gauge))
}

pub(super) fn observe(method: &str, route: &str, status: StatusCode, elapsed: Duration) {
    let Some(metrics) = HTTP_METRICS.as_ref() else {
        return;
    };

    let status_code = status.as_str();

    metrics
        .requests_total
        .with_label_values(&[method, route, status_class(status), status_code])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(elapsed.as_secs_f64());
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() / 100 {
        1 => "1xx",
        2 => "2xx",
        3 => "3xx",
        4 => "4xx",
        5 => "5xx",
        _ => "other",
    }
}

/// Prometheus text exposition of every HTTP metric.
#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let Some(metrics) = HTTP_METRICS.as_ref() else {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        return;
    };

    let encoder = TextEncoder::new();

    match encoder.encode_to_string(&metrics.registry.gather()) {
        Ok(body) => {
            res.render(body);

            if let Err(source) = res.add_header(CONTENT_TYPE, encoder.format_type(), true) {
                error!("failed to set metrics content type: {source}");
            }
        }
        Err(source) => {
            error!("failed to encode metrics: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

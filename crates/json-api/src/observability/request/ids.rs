//! `x-request-id` handling.

use salvo::{http::header::HeaderValue, prelude::Response};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Keep the caller's id when it can be echoed back, otherwise mint a v7 uuid.
pub(super) fn resolve(incoming: Option<String>) -> String {
    incoming
        .map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty() && HeaderValue::from_str(id).is_ok())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

pub(super) fn echo(res: &mut Response, request_id: &str) {
    if let Err(source) = res.add_header(REQUEST_ID_HEADER, request_id, true) {
        warn!(request_id, "could not set request id response header: {source}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoming_request_id_is_kept() {
        assert_eq!(resolve(Some(" abc-123 ".to_string())), "abc-123");
    }

    #[test]
    fn blank_or_missing_request_id_is_generated() {
        for incoming in [None, Some("   ".to_string())] {
            let generated = resolve(incoming);

            assert!(Uuid::parse_str(&generated).is_ok(), "expected a generated uuid");
        }
    }
}

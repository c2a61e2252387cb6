//! Error response rendering
//!
//! Handlers fail with [`StatusError`]s whose `brief` carries the message meant
//! for the client. The catcher turns every error response, including ones salvo
//! raises itself for unknown routes or unreadable bodies, into `{"error": "..."}`.

use salvo::{catcher::Catcher, http::ResBody, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// What went wrong
    pub error: String,
}

#[handler]
async fn render_error_body(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(status) = res
        .status_code
        .filter(|status| status.is_client_error() || status.is_server_error())
    else {
        return;
    };

    let error = match res.take_body() {
        ResBody::Error(error) => error.brief,
        _ => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };

    res.render(Json(ErrorResponse { error }));

    ctrl.skip_rest();
}

/// Catcher rendering every error as an [`ErrorResponse`].
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_error_body)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn missing_item() -> Result<(), StatusError> {
        Err(StatusError::not_found().brief("Cart item not found"))
    }

    fn service() -> Service {
        Service::new(Router::with_path("missing").get(missing_item)).catcher(catcher())
    }

    #[tokio::test]
    async fn status_error_brief_becomes_error_field() -> TestResult {
        let mut res = TestClient::get("http://example.com/missing")
            .send(&service())
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "Cart item not found");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_gets_json_error() -> TestResult {
        let mut res = TestClient::get("http://example.com/nowhere")
            .send(&service())
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(!body.error.is_empty(), "expected an error message");

        Ok(())
    }
}

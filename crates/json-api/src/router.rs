//! App Router

use salvo::{
    affix_state::inject,
    catch_panic::CatchPanic,
    cors::{AllowHeaders, AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{HeaderValue, InvalidHeaderValue},
    },
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use storefront_app::context::AppContext;

use crate::{
    carts, checkout, errors, healthcheck,
    observability::{self, RequestLogging},
    products,
};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Storefront API routes.
pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("products").get(products::index::handler))
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .post(carts::create::handler)
                .push(
                    Router::with_path("{id}")
                        .put(carts::update::handler)
                        .delete(carts::delete::handler),
                ),
        )
        .push(Router::with_path("checkout").post(checkout::create::handler))
}

/// Build the CORS middleware; `*` allows any origin.
pub(crate) fn cors(allowed_origin: &str) -> Result<CorsHandler, InvalidHeaderValue> {
    let origin = match allowed_origin.trim() {
        "*" => AllowOrigin::any(),
        origin => AllowOrigin::exact(HeaderValue::from_str(origin)?),
    };

    Ok(Cors::new()
        .allow_origin(origin)
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::any())
        .into_handler())
}

/// The complete HTTP service: middleware, API, operational endpoints and docs.
pub(crate) fn service(
    app: AppContext,
    cors: CorsHandler,
    request_logging: RequestLogging,
) -> Service {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(app))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(app_router());

    let doc = OpenApi::new("Storefront API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"));

    Service::new(router).hoop(cors).catcher(errors::catcher())
}

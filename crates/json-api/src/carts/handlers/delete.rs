//! Remove Cart Item Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{
        errors::into_status_error,
        handlers::{parse_cart_item_id, update::CartMessageResponse},
    },
    extensions::DepotExt as _,
};

/// Remove Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Item removed from cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.delete",
    skip(id, depot),
    fields(cart_item_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartMessageResponse>, StatusError> {
    let app = depot.storefront()?;
    let item = parse_cart_item_id(&id.into_inner())?;

    tracing::Span::current().record("cart_item_uuid", tracing::field::display(item));

    app
        .carts
        .remove_item(item)
        .await
        .map_err(into_status_error)?;

    tracing::info!(cart_item_uuid = %item, "removed cart item");

    Ok(Json(CartMessageResponse {
        message: "Item removed from cart".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::carts::{
        CartsServiceError, MockCartsService, records::CartItemUuid,
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{carts_service, storage_error},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("api/cart/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_returns_200() -> TestResult {
        let uuid = CartItemUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .with(eq(uuid))
            .return_once(|_| Ok(()));

        let mut res = TestClient::delete(format!("http://example.com/api/cart/{uuid}"))
            .send(&make_service(carts))
            .await;

        let body: CartMessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Item removed from cart");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_item_returns_404() -> TestResult {
        let uuid = CartItemUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .with(eq(uuid))
            .return_once(|_| Err(CartsServiceError::NotFound));

        let mut res = TestClient::delete(format!("http://example.com/api/cart/{uuid}"))
            .send(&make_service(carts))
            .await;

        let error: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(error.error, "Cart item not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_malformed_id_returns_404() -> TestResult {
        let res = TestClient::delete("http://example.com/api/cart/42")
            .send(&make_service(MockCartsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_storage_error_returns_500() -> TestResult {
        let uuid = CartItemUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .return_once(|_| Err(CartsServiceError::Sql(storage_error())));

        let res = TestClient::delete(format!("http://example.com/api/cart/{uuid}"))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}

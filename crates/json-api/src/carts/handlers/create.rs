//! Add Cart Item Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::records::ProductId;

use crate::{carts::errors::into_status_error, extensions::DepotExt as _};

const DEFAULT_QUANTITY: i64 = 1;

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    /// Product to add
    pub product_id: Option<String>,

    /// Units to add, defaults to 1
    pub quantity: Option<i64>,
}

/// Cart Item Changed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemChangedResponse {
    /// Outcome description
    pub message: String,

    /// Cart item that was created or incremented
    pub cart_item_id: Uuid,
}

/// Add Cart Item Handler
///
/// Adds a product to the cart. Adding a product that is already in the cart
/// increments its quantity instead of creating a second line.
#[endpoint(
    tags("cart"),
    summary = "Add Cart Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added to cart"),
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.create",
    skip(json, depot, res),
    fields(
        product_id = tracing::field::Empty,
        quantity = tracing::field::Empty,
        cart_item_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemChangedResponse>, StatusError> {
    let app = depot.storefront()?;
    let request = json.into_inner();

    let product = request
        .product_id
        .filter(|product| !product.is_empty())
        .map(ProductId::new)
        .ok_or_else(|| StatusError::bad_request().brief("Product ID is required"))?;

    let quantity = request.quantity.unwrap_or(DEFAULT_QUANTITY);

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(&product));
    span.record("quantity", quantity);

    let upsert = app
        .carts
        .add_item(product.clone(), quantity)
        .await
        .map_err(into_status_error)?;

    let cart_item_uuid = upsert.item.uuid;

    span.record("cart_item_uuid", tracing::field::display(cart_item_uuid));

    let message = if upsert.inserted {
        res.status_code(StatusCode::CREATED);

        tracing::info!(%cart_item_uuid, product_id = %product, quantity, "added item to cart");

        "Item added to cart"
    } else {
        tracing::info!(
            %cart_item_uuid,
            product_id = %product,
            quantity = upsert.item.quantity,
            "incremented cart item"
        );

        "Cart updated successfully"
    };

    Ok(Json(CartItemChangedResponse {
        message: message.to_string(),
        cart_item_id: cart_item_uuid.into(),
    }))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::carts::{
        CartsServiceError, MockCartsService,
        records::{CartItemUpsert, CartItemUuid},
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{carts_service, make_cart_item},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("api/cart").post(handler))
    }

    fn upsert(uuid: CartItemUuid, quantity: i64, inserted: bool) -> CartItemUpsert {
        CartItemUpsert {
            item: make_cart_item(uuid, "1", quantity),
            inserted,
        }
    }

    #[tokio::test]
    async fn test_add_new_item_returns_201() -> TestResult {
        let uuid = CartItemUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .with(eq(ProductId::new("1")), eq(2))
            .return_once(move |_, _| Ok(upsert(uuid, 2, true)));

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&json!({ "productId": "1", "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        let body: CartItemChangedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.message, "Item added to cart");
        assert_eq!(body.cart_item_id, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_add_existing_item_returns_200() -> TestResult {
        let uuid = CartItemUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .with(eq(ProductId::new("1")), eq(1))
            .return_once(move |_, _| Ok(upsert(uuid, 3, false)));

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&json!({ "productId": "1", "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        let body: CartItemChangedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Cart updated successfully");
        assert_eq!(body.cart_item_id, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_add_defaults_quantity_to_one() -> TestResult {
        let uuid = CartItemUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .with(eq(ProductId::new("3")), eq(1))
            .return_once(move |_, _| Ok(upsert(uuid, 1, true)));

        let res = TestClient::post("http://example.com/api/cart")
            .json(&json!({ "productId": "3" }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_without_product_id_returns_400() -> TestResult {
        for body in [json!({}), json!({ "productId": "" }), json!({ "quantity": 2 })] {
            let mut res = TestClient::post("http://example.com/api/cart")
                .json(&body)
                .send(&make_service(MockCartsService::new()))
                .await;

            let error: ErrorResponse = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
            assert_eq!(error.error, "Product ID is required");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_product_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ProductNotFound));

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&json!({ "productId": "missing" }))
            .send(&make_service(carts))
            .await;

        let error: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(error.error, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_non_positive_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .with(eq(ProductId::new("1")), eq(0))
            .return_once(|_, _| Err(CartsServiceError::InvalidQuantity));

        let res = TestClient::post("http://example.com/api/cart")
            .json(&json!({ "productId": "1", "quantity": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_malformed_json_returns_400() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/cart")
            .raw_json("{ not json")
            .send(&make_service(MockCartsService::new()))
            .await;

        let error: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(!error.error.is_empty(), "expected an error message");

        Ok(())
    }
}

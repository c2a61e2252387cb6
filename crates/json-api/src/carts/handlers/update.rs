//! Update Cart Item Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    carts::{
        errors::{into_status_error, invalid_quantity},
        handlers::parse_cart_item_id,
    },
    extensions::DepotExt as _,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New quantity, must be at least 1
    pub quantity: Option<i64>,
}

/// Cart Message Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartMessageResponse {
    /// Outcome description
    pub message: String,
}

/// Update Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Cart item updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.update",
    skip(id, json, depot),
    fields(
        cart_item_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartMessageResponse>, StatusError> {
    let app = depot.storefront()?;

    let quantity = json
        .into_inner()
        .quantity
        .filter(|quantity| *quantity > 0)
        .ok_or_else(invalid_quantity)?;

    let item = parse_cart_item_id(&id.into_inner())?;

    let span = tracing::Span::current();

    span.record("cart_item_uuid", tracing::field::display(item));
    span.record("quantity", quantity);

    app
        .carts
        .update_quantity(item, quantity)
        .await
        .map_err(into_status_error)?;

    tracing::info!(cart_item_uuid = %item, quantity, "updated cart item quantity");

    Ok(Json(CartMessageResponse {
        message: "Cart item updated successfully".to_string(),
    }))
}

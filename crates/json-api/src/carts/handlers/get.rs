//! Get Cart Handler

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::records::{CartLineRecord, CartRecord};

use crate::{carts::errors::into_status_error, extensions::DepotExt as _};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Cart lines, oldest first
    pub items: Vec<CartItemResponse>,

    /// Sum of every line's total, rounded to cents
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        Self {
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total: cart.total,
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// Cart item identifier
    pub id: Uuid,

    /// Product in this line
    pub product_id: String,

    /// Units of the product
    pub quantity: i64,

    /// Product name
    pub name: String,

    /// Product unit price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Product image URL
    pub image: String,

    /// `quantity × price`
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub item_total: Decimal,
}

impl From<CartLineRecord> for CartItemResponse {
    fn from(line: CartLineRecord) -> Self {
        Self {
            id: line.uuid.into(),
            product_id: line.product_id.into_string(),
            quantity: line.quantity,
            name: line.name,
            price: line.price,
            image: line.image,
            item_total: line.item_total,
        }
    }
}

/// Get Cart Handler
///
/// Returns the shared cart with product details and totals.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Current cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.storefront()?;

    let cart = app
        .carts
        .get_cart()
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

//! Checkout Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{
    carts::records::CartLineRecord,
    checkout::{
        data::CustomerInfo,
        records::ReceiptRecord,
    },
};

use crate::{checkout::errors::into_status_error, extensions::DepotExt as _};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutRequest {
    /// Who is placing the order
    pub customer_info: Option<CustomerInfoRequest>,
}

/// Customer details submitted with a checkout
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerInfoRequest {
    /// Customer name, required
    pub name: Option<String>,

    /// Customer email, required
    pub email: Option<String>,

    /// Delivery address
    pub address: Option<String>,
}

impl From<CustomerInfoRequest> for CustomerInfo {
    fn from(request: CustomerInfoRequest) -> Self {
        Self {
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            address: request.address,
        }
    }
}

/// Receipt Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptResponse {
    /// Order identifier, `ORD-<epoch millis>`
    pub order_id: String,

    /// Customer details as accepted
    pub customer_info: CustomerInfoResponse,

    /// Cart lines at the time of checkout
    pub items: Vec<ReceiptItemResponse>,

    /// Order total, rounded to cents
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,

    /// ISO-8601 checkout time in UTC, with milliseconds
    pub timestamp: String,

    /// Always `confirmed`
    pub status: String,
}

impl From<ReceiptRecord> for ReceiptResponse {
    fn from(receipt: ReceiptRecord) -> Self {
        Self {
            order_id: receipt.order_id.to_string(),
            customer_info: receipt.customer.into(),
            items: receipt.items.into_iter().map(Into::into).collect(),
            total: receipt.total,
            timestamp: format!("{:.3}", receipt.timestamp),
            status: receipt.status.as_str().to_string(),
        }
    }
}

/// Customer Info Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerInfoResponse {
    /// Customer name
    pub name: String,

    /// Customer email
    pub email: String,

    /// Delivery address, when given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl From<CustomerInfo> for CustomerInfoResponse {
    fn from(customer: CustomerInfo) -> Self {
        Self {
            name: customer.name,
            email: customer.email,
            address: customer.address,
        }
    }
}

/// Receipt Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptItemResponse {
    /// Cart item identifier
    pub id: Uuid,

    /// Product in this line
    pub product_id: String,

    /// Units purchased
    pub quantity: i64,

    /// Product name
    pub name: String,

    /// Unit price at checkout
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// `quantity × price`
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub item_total: Decimal,
}

impl From<CartLineRecord> for ReceiptItemResponse {
    fn from(line: CartLineRecord) -> Self {
        Self {
            id: line.uuid.into(),
            product_id: line.product_id.into_string(),
            quantity: line.quantity,
            name: line.name,
            price: line.price,
            item_total: line.item_total,
        }
    }
}

/// Checkout Handler
///
/// Turns the cart into a confirmed receipt and empties the cart. Receipts are
/// not stored.
#[endpoint(
    tags("checkout"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Order confirmed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid customer or empty cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "checkout.create",
    skip(json, depot),
    fields(order_id = tracing::field::Empty, total = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
) -> Result<Json<ReceiptResponse>, StatusError> {
    let app = depot.storefront()?;

    let customer = json.into_inner().customer_info.unwrap_or_default().into();

    let receipt = app
        .checkout
        .checkout(customer)
        .await
        .map_err(into_status_error)?;

    let span = tracing::Span::current();

    span.record("order_id", tracing::field::display(&receipt.order_id));
    span.record("total", tracing::field::display(receipt.total));

    tracing::info!(
        order_id = %receipt.order_id,
        items = receipt.items.len(),
        total = %receipt.total,
        "checkout confirmed"
    );

    Ok(Json(receipt.into()))
}

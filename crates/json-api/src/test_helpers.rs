//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    database::SqlError,
    domain::{
        carts::{
            MockCartsService,
            records::{CartItemRecord, CartItemUuid, CartLineRecord, CartRecord},
        },
        checkout::{
            MockCheckoutService,
            data::CustomerInfo,
            order_ids::OrderIdGenerator,
            records::{ReceiptRecord, ReceiptStatus},
        },
        products::{
            MockProductsService,
            records::{ProductId, ProductRecord},
        },
    },
};

use crate::errors;

pub(crate) const RECEIPT_MILLIS: i64 = 1_700_000_000_000;

pub(crate) fn app_context(
    products: MockProductsService,
    carts: MockCartsService,
    checkout: MockCheckoutService,
) -> AppContext {
    AppContext {
        products: Arc::new(products),
        carts: Arc::new(carts),
        checkout: Arc::new(checkout),
    }
}

/// Serve `route` with the given services injected and JSON error bodies.
pub(crate) fn app_service(app: AppContext, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(app)).push(route)).catcher(errors::catcher())
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    app_service(
        app_context(products, MockCartsService::new(), MockCheckoutService::new()),
        route,
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    app_service(
        app_context(MockProductsService::new(), carts, MockCheckoutService::new()),
        route,
    )
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    app_service(
        app_context(MockProductsService::new(), MockCartsService::new(), checkout),
        route,
    )
}

pub(crate) fn storage_error() -> SqlError {
    SqlError::PoolClosed
}

pub(crate) fn make_product(id: &str, name: &str, cents: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        image: format!("https://example.com/{id}.png"),
        description: String::new(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_item(uuid: CartItemUuid, product: &str, quantity: i64) -> CartItemRecord {
    CartItemRecord {
        uuid,
        product_id: ProductId::new(product),
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_line(
    uuid: CartItemUuid,
    product: &str,
    quantity: i64,
    cents: i64,
) -> CartLineRecord {
    let price = Decimal::new(cents, 2);

    CartLineRecord {
        uuid,
        product_id: ProductId::new(product),
        quantity,
        name: format!("Product {product}"),
        price,
        image: format!("https://example.com/{product}.png"),
        item_total: Decimal::from(quantity) * price,
    }
}

pub(crate) fn make_cart(lines: Vec<CartLineRecord>) -> CartRecord {
    CartRecord::from_lines(lines)
}

pub(crate) fn make_receipt(items: Vec<CartLineRecord>) -> ReceiptRecord {
    let timestamp = Timestamp::from_millisecond(RECEIPT_MILLIS).unwrap_or(Timestamp::UNIX_EPOCH);
    let cart = make_cart(items);

    ReceiptRecord {
        order_id: OrderIdGenerator::new().next_at(timestamp),
        customer: CustomerInfo {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            address: None,
        },
        items: cart.items,
        total: cart.total,
        timestamp,
        status: ReceiptStatus::Confirmed,
    }
}

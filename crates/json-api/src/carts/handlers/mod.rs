//! Cart Handlers

use storefront_app::domain::carts::records::CartItemUuid;

use crate::carts::errors::cart_item_not_found;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod update;

/// Parse a cart item id from the path; ids that cannot exist are reported as missing.
fn parse_cart_item_id(id: &str) -> Result<CartItemUuid, salvo::http::StatusError> {
    id.parse().map_err(|_ignored: uuid::Error| cart_item_not_found())
}

//! Cart Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{carts::totals::cart_total, products::records::ProductId},
    uuids::TypedUuid,
};

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// Cart Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemRecord {
    pub uuid: CartItemUuid,
    pub product_id: ProductId,
    pub quantity: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Outcome of adding a product to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemUpsert {
    pub item: CartItemRecord,

    /// `true` when a new line was created, `false` when an existing line was incremented.
    pub inserted: bool,
}

/// A cart item joined with its product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineRecord {
    pub uuid: CartItemUuid,
    pub product_id: ProductId,
    pub quantity: i64,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub item_total: Decimal,
}

/// Cart Record
///
/// Derived from the stored items on every read, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub items: Vec<CartLineRecord>,
    pub total: Decimal,
}

impl CartRecord {
    #[must_use]
    pub fn from_lines(items: Vec<CartLineRecord>) -> Self {
        let total = cart_total(&items);

        Self { items, total }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//! Checkout Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{
    carts::records::CartLineRecord,
    checkout::{data::CustomerInfo, order_ids::OrderId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    Confirmed,
}

impl ReceiptStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
        }
    }
}

/// Receipt Record
///
/// Built from the cart as it stood when checkout read it. Receipts are returned
/// to the caller and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptRecord {
    pub order_id: OrderId,
    pub customer: CustomerInfo,
    pub items: Vec<CartLineRecord>,
    pub total: Decimal,
    pub timestamp: Timestamp,
    pub status: ReceiptStatus,
}

//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::records::ProductId;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
}

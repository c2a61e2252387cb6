//! Default catalog seeded into an empty store.

use rust_decimal::Decimal;

use crate::domain::products::{data::NewProduct, records::ProductId};

const DEFAULT_PRODUCTS: [(&str, &str, i64, &str); 8] = [
    (
        "1",
        "Wireless Headphones",
        99_99,
        "High-quality wireless headphones with noise cancellation",
    ),
    (
        "2",
        "Smart Watch",
        199_99,
        "Feature-rich smartwatch with health monitoring",
    ),
    (
        "3",
        "Laptop Backpack",
        49_99,
        "Durable laptop backpack with USB charging port",
    ),
    (
        "4",
        "Bluetooth Speaker",
        79_99,
        "Portable Bluetooth speaker with rich sound",
    ),
    (
        "5",
        "Phone Case",
        24_99,
        "Protective phone case with stylish design",
    ),
    (
        "6",
        "Tablet Stand",
        34_99,
        "Adjustable tablet stand for comfortable viewing",
    ),
    ("7", "USB-C Cable", 19_99, "Fast charging USB-C cable 6ft length"),
    (
        "8",
        "Wireless Mouse",
        29_99,
        "Ergonomic wireless mouse with precision tracking",
    ),
];

/// The storefront's starter catalog; prices are given in cents.
#[must_use]
pub fn default_catalog() -> Vec<NewProduct> {
    DEFAULT_PRODUCTS
        .iter()
        .map(|&(id, name, cents, description)| NewProduct {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            image: format!("https://picsum.photos/300/300?random={id}"),
            description: description.to_string(),
        })
        .collect()
}

//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::products::{
        ProductsServiceError,
        data::NewProduct,
        records::{ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
    test::TestContext,
};

/// Insert a product priced at `cents`, regardless of what the catalog already holds.
pub(crate) async fn seed_product(
    ctx: &TestContext,
    id: &str,
    cents: i64,
) -> Result<ProductRecord, ProductsServiceError> {
    let mut tx = ctx.db.pool().begin().await?;

    let product = PgProductsRepository::new()
        .create_product(
            &mut tx,
            NewProduct {
                id: ProductId::new(id),
                name: format!("Product {id}"),
                price: Decimal::new(cents, 2),
                image: format!("https://example.com/{id}.png"),
                description: String::new(),
            },
        )
        .await?;

    tx.commit().await?;

    Ok(product)
}

//! Carts service.
//!
//! There is one cart for the whole storefront; every caller reads and mutates
//! the same set of items.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            records::{CartItemRecord, CartItemUpsert, CartItemUuid, CartRecord},
            repositories::PgCartItemsRepository,
        },
        products::records::ProductId,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let lines = self.items_repository.get_cart_lines(&mut tx).await?;

        tx.commit().await?;

        Ok(CartRecord::from_lines(lines))
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self, product),
        fields(product_id = %product),
        err
    )]
    async fn add_item(
        &self,
        product: ProductId,
        quantity: i64,
    ) -> Result<CartItemUpsert, CartsServiceError> {
        ensure_positive(quantity)?;

        let mut tx = self.db.begin().await?;

        let upsert = self
            .items_repository
            .upsert_cart_item(&mut tx, CartItemUuid::new(), &product, quantity)
            .await?;

        tx.commit().await?;

        debug!(
            cart_item_uuid = %upsert.item.uuid,
            product_id = %product,
            quantity = upsert.item.quantity,
            inserted = upsert.inserted,
            "upserted cart item"
        );

        Ok(upsert)
    }

    async fn update_quantity(
        &self,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<CartItemRecord, CartsServiceError> {
        ensure_positive(quantity)?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .items_repository
            .update_cart_item_quantity(&mut tx, item, quantity)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_item(&self, item: CartItemUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.items_repository.delete_cart_item(&mut tx, item).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

fn ensure_positive(quantity: i64) -> Result<(), CartsServiceError> {
    if quantity <= 0 {
        return Err(CartsServiceError::InvalidQuantity);
    }

    Ok(())
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the cart with every item joined to its product.
    async fn get_cart(&self) -> Result<CartRecord, CartsServiceError>;

    /// Add `quantity` of a product, creating its line or incrementing the existing one.
    async fn add_item(
        &self,
        product: ProductId,
        quantity: i64,
    ) -> Result<CartItemUpsert, CartsServiceError>;

    /// Overwrite the quantity of a cart item.
    async fn update_quantity(
        &self,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Remove an item from the cart.
    async fn remove_item(&self, item: CartItemUuid) -> Result<(), CartsServiceError>;
}

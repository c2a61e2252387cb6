//! Checkout service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{error, info};

use crate::{
    database::Db,
    domain::{
        carts::{records::CartRecord, repositories::PgCartItemsRepository},
        checkout::{
            data::CustomerInfo,
            errors::CheckoutServiceError,
            order_ids::{ORDER_IDS, OrderIdGenerator},
            records::{ReceiptRecord, ReceiptStatus},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgCheckoutService {
    db: Db,
    items_repository: PgCartItemsRepository,
    order_ids: &'static OrderIdGenerator,
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items_repository: PgCartItemsRepository::new(),
            order_ids: &ORDER_IDS,
        }
    }

    async fn snapshot_cart(&self) -> Result<CartRecord, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let lines = self.items_repository.get_cart_lines(&mut tx).await?;

        tx.commit().await?;

        Ok(CartRecord::from_lines(lines))
    }

    async fn clear_cart(&self) -> Result<u64, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let cleared = self.items_repository.clear_cart_items(&mut tx).await?;

        tx.commit().await?;

        Ok(cleared)
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    #[tracing::instrument(
        name = "checkout.service.checkout",
        skip(self, customer),
        fields(order_id = tracing::field::Empty, items = tracing::field::Empty),
        err
    )]
    async fn checkout(
        &self,
        customer: CustomerInfo,
    ) -> Result<ReceiptRecord, CheckoutServiceError> {
        let customer = customer
            .normalize()
            .ok_or(CheckoutServiceError::InvalidCustomer)?;

        let cart = self.snapshot_cart().await?;

        if cart.is_empty() {
            return Err(CheckoutServiceError::EmptyCart);
        }

        let now = Timestamp::now();
        let timestamp = Timestamp::from_millisecond(now.as_millisecond()).unwrap_or(now);
        let order_id = self.order_ids.next_at(timestamp);

        let span = tracing::Span::current();

        span.record("order_id", tracing::field::display(&order_id));
        span.record("items", cart.items.len());

        let receipt = ReceiptRecord {
            order_id,
            customer,
            items: cart.items,
            total: cart.total,
            timestamp,
            status: ReceiptStatus::Confirmed,
        };

        match self.clear_cart().await {
            Ok(cleared) => info!(order_id = %receipt.order_id, cleared, "cleared cart after checkout"),
            Err(error) => {
                error!(order_id = %receipt.order_id, %error, "failed to clear cart after checkout");
            }
        }

        Ok(receipt)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Turn the current cart into a receipt and empty the cart.
    ///
    /// The cart is cleared on a best-effort basis: a failure to clear is logged
    /// and the receipt is still returned.
    async fn checkout(&self, customer: CustomerInfo)
    -> Result<ReceiptRecord, CheckoutServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{carts::CartsService, products::records::ProductId},
        test::{TestContext, helpers::seed_product},
    };

    use super::*;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: None,
        }
    }

    #[tokio::test]
    async fn checkout_builds_receipt_and_clears_cart() -> TestResult {
        let ctx = TestContext::new().await;

        seed_product(&ctx, "1", 99_99).await?;

        ctx.carts.add_item(ProductId::new("1"), 2).await?;
        ctx.carts.add_item(ProductId::new("1"), 1).await?;

        let receipt = ctx.checkout.checkout(customer()).await?;

        assert!(receipt.order_id.to_string().starts_with("ORD-"));
        assert_eq!(receipt.status, ReceiptStatus::Confirmed);
        assert_eq!(receipt.customer, customer());
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items.first().map(|line| line.quantity), Some(3));
        assert_eq!(receipt.total, Decimal::new(299_97, 2));

        assert!(ctx.carts.get_cart().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn receipt_total_matches_cart_total() -> TestResult {
        let ctx = TestContext::new().await;

        seed_product(&ctx, "1", 99_99).await?;
        seed_product(&ctx, "2", 199_99).await?;

        ctx.carts.add_item(ProductId::new("1"), 1).await?;
        ctx.carts.add_item(ProductId::new("2"), 3).await?;

        let cart_total = ctx.carts.get_cart().await?.total;
        let receipt = ctx.checkout.checkout(customer()).await?;

        assert_eq!(receipt.total, cart_total);
        assert_eq!(receipt.total, Decimal::new(699_96, 2));

        Ok(())
    }

    #[tokio::test]
    async fn checkout_with_empty_cart_fails() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.checkout.checkout(customer()).await;

        assert!(
            matches!(result, Err(CheckoutServiceError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
        assert!(ctx.carts.get_cart().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn checkout_with_blank_customer_leaves_cart_untouched() -> TestResult {
        let ctx = TestContext::new().await;

        seed_product(&ctx, "1", 5_00).await?;

        ctx.carts.add_item(ProductId::new("1"), 1).await?;

        let result = ctx
            .checkout
            .checkout(CustomerInfo {
                name: "   ".to_string(),
                ..customer()
            })
            .await;

        assert!(
            matches!(result, Err(CheckoutServiceError::InvalidCustomer)),
            "expected InvalidCustomer, got {result:?}"
        );
        assert_eq!(ctx.carts.get_cart().await?.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn consecutive_checkouts_get_distinct_order_ids() -> TestResult {
        let ctx = TestContext::new().await;

        seed_product(&ctx, "1", 1_00).await?;

        ctx.carts.add_item(ProductId::new("1"), 1).await?;
        let first = ctx.checkout.checkout(customer()).await?;

        ctx.carts.add_item(ProductId::new("1"), 1).await?;
        let second = ctx.checkout.checkout(customer()).await?;

        assert!(second.order_id > first.order_id);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_returns_receipt_when_clearing_cart_fails() -> TestResult {
        let ctx = TestContext::new().await;

        sqlx::query(
            "CREATE FUNCTION refuse_cart_clear() RETURNS trigger LANGUAGE plpgsql AS $$ \
             BEGIN RAISE EXCEPTION 'cart clear refused'; END $$",
        )
        .execute(ctx.db.pool())
        .await?;

        sqlx::query(
            "CREATE TRIGGER refuse_cart_clear BEFORE DELETE ON cart_items \
             FOR EACH STATEMENT EXECUTE FUNCTION refuse_cart_clear()",
        )
        .execute(ctx.db.pool())
        .await?;

        seed_product(&ctx, "1", 99_99).await?;

        ctx.carts.add_item(ProductId::new("1"), 2).await?;

        let cart_total = ctx.carts.get_cart().await?.total;
        let receipt = ctx.checkout.checkout(customer()).await?;

        assert_eq!(receipt.status, ReceiptStatus::Confirmed);
        assert_eq!(receipt.total, cart_total);

        let cart = ctx.carts.get_cart().await?;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, cart_total);

        Ok(())
    }

    #[tokio::test]
    async fn separate_services_share_order_id_sequence() -> TestResult {
        let ctx = TestContext::new().await;
        let other = PgCheckoutService::new(Db::new(ctx.db.pool().clone()));

        seed_product(&ctx, "1", 1_00).await?;

        ctx.carts.add_item(ProductId::new("1"), 1).await?;
        let first = ctx.checkout.checkout(customer()).await?;

        ctx.carts.add_item(ProductId::new("1"), 1).await?;
        let second = other.checkout(customer()).await?;

        assert!(second.order_id > first.order_id);

        Ok(())
    }

    #[tokio::test]
    async fn receipt_timestamp_has_millisecond_precision() -> TestResult {
        let ctx = TestContext::new().await;

        seed_product(&ctx, "1", 1_00).await?;

        ctx.carts.add_item(ProductId::new("1"), 1).await?;

        let receipt = ctx.checkout.checkout(customer()).await?;

        assert_eq!(receipt.timestamp.subsec_nanosecond() % 1_000_000, 0);
        assert!(receipt.order_id.millis() >= receipt.timestamp.as_millisecond());

        Ok(())
    }

    #[tokio::test]
    async fn update_then_remove_then_checkout_fails_on_empty_cart() -> TestResult {
        let ctx = TestContext::new().await;

        seed_product(&ctx, "2", 199_99).await?;

        let item = ctx.carts.add_item(ProductId::new("2"), 1).await?.item.uuid;

        ctx.carts.update_quantity(item, 5).await?;

        assert_eq!(ctx.carts.get_cart().await?.total, Decimal::new(999_95, 2));

        ctx.carts.remove_item(item).await?;

        let result = ctx.checkout.checkout(customer()).await;

        assert!(matches!(result, Err(CheckoutServiceError::EmptyCart)));

        Ok(())
    }
}

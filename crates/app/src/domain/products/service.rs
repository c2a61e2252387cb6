//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn seed_products(&self, products: Vec<NewProduct>) -> Result<u64, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self.repository.lock_and_count_products(&mut tx).await?;

        if existing > 0 {
            tx.commit().await?;

            info!(existing, "catalog already seeded");

            return Ok(0);
        }

        let mut inserted = 0_u64;

        for product in products {
            self.repository.create_product(&mut tx, product).await?;

            inserted += 1;
        }

        tx.commit().await?;

        info!(inserted, "seeded catalog");

        Ok(inserted)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves every product in the catalog.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Inserts the given products when the catalog is empty, returning how many were inserted.
    async fn seed_products(&self, products: Vec<NewProduct>) -> Result<u64, ProductsServiceError>;
}

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shopping_list::services::ProductCatalog;

use crate::errors::map_sqlx_error;

/// Concrete-product lookups against the `product_concretes` table.
pub struct ProductCatalogPostgres {
    pool: PgPool,
}

impl ProductCatalogPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogPostgres {
    async fn has_product_concrete(&self, sku: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM product_concretes WHERE sku = $1)",
        )
        .bind(sku)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_product_concrete_id_by_sku(
        &self,
        sku: &str,
    ) -> Result<Option<i64>, RepositoryError> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM product_concretes WHERE sku = $1")
            .bind(sku)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

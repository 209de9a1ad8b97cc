use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ShoppingListItemId;
use business::domain::shopping_list::model::{ShoppingList, ShoppingListItem};
use business::domain::shopping_list::repository::{
    ShoppingListEntityManager, ShoppingListItemTransaction,
};

use super::entity::{ShoppingListEntity, ShoppingListItemEntity};
use crate::errors::map_sqlx_error;

const ITEM_COLUMNS: &str = "id, fk_shopping_list, sku, quantity, id_company_user, attributes";

/// Inserts a new item or updates the stored one, on any executor.
async fn save_item<'e, E>(
    executor: E,
    item: &ShoppingListItem,
) -> Result<ShoppingListItem, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let fk_shopping_list = item
        .fk_shopping_list
        .ok_or(RepositoryError::Persistence)?;

    let sql = match item.id {
        Some(_) => format!(
            "UPDATE shopping_list_items SET fk_shopping_list = $2, sku = $3, quantity = $4, id_company_user = $5, attributes = $6, updated_at = NOW() WHERE id = $1 RETURNING {ITEM_COLUMNS}"
        ),
        None => format!(
            "INSERT INTO shopping_list_items (fk_shopping_list, sku, quantity, id_company_user, attributes) VALUES ($1, $2, $3, $4, $5) RETURNING {ITEM_COLUMNS}"
        ),
    };

    let mut query = sqlx::query_as::<_, ShoppingListItemEntity>(&sql);
    if let Some(id) = item.id {
        query = query.bind(id.value());
    }
    let entity = query
        .bind(fk_shopping_list.value())
        .bind(&item.sku)
        .bind(item.quantity)
        .bind(item.id_company_user.map(|id| id.value()))
        .bind(Json(&item.attributes))
        .fetch_optional(executor)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

    let mut saved = entity.into_domain();
    saved.customer_reference = item.customer_reference.clone();
    saved.id_product = item.id_product;
    Ok(saved)
}

pub struct ShoppingListEntityManagerPostgres {
    pool: PgPool,
}

impl ShoppingListEntityManagerPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingListEntityManager for ShoppingListEntityManagerPostgres {
    async fn create_shopping_list(
        &self,
        shopping_list: &ShoppingList,
    ) -> Result<ShoppingList, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListEntity>(
            r#"WITH inserted AS (
                INSERT INTO shopping_lists (customer_reference, name)
                VALUES ($1, $2)
                RETURNING id, customer_reference, name, created_at, updated_at
            )
            SELECT i.id, i.customer_reference, i.name, c.first_name, c.last_name, i.created_at, i.updated_at
            FROM inserted i
            LEFT JOIN customers c ON c.customer_reference = i.customer_reference"#,
        )
        .bind(shopping_list.customer_reference.as_str())
        .bind(&shopping_list.name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn save_shopping_list_item(
        &self,
        item: &ShoppingListItem,
    ) -> Result<ShoppingListItem, RepositoryError> {
        save_item(&self.pool, item).await
    }

    async fn delete_shopping_list_item(
        &self,
        id: ShoppingListItemId,
    ) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM shopping_list_items WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn begin_item_transaction(
        &self,
    ) -> Result<Box<dyn ShoppingListItemTransaction>, RepositoryError> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Box::new(PgShoppingListItemTransaction { tx: Some(tx) }))
    }
}

/// Item writes sharing one database transaction. Dropping it without
/// commit rolls everything back.
pub struct PgShoppingListItemTransaction {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgShoppingListItemTransaction {
    fn finished() -> RepositoryError {
        tracing::error!("shopping list item transaction already finished");
        RepositoryError::Persistence
    }
}

#[async_trait]
impl ShoppingListItemTransaction for PgShoppingListItemTransaction {
    async fn save_shopping_list_item(
        &mut self,
        item: &ShoppingListItem,
    ) -> Result<ShoppingListItem, RepositoryError> {
        let tx = self.tx.as_mut().ok_or_else(Self::finished)?;
        save_item(&mut **tx, item).await
    }

    async fn commit(&mut self) -> Result<(), RepositoryError> {
        let tx = self.tx.take().ok_or_else(Self::finished)?;
        tx.commit().await.map_err(map_sqlx_error)
    }

    async fn rollback(&mut self) -> Result<(), RepositoryError> {
        let tx = self.tx.take().ok_or_else(Self::finished)?;
        tx.rollback().await.map_err(map_sqlx_error)
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{
    CompanyBusinessUnitId, CompanyUserId, CustomerReference, ShoppingListId, ShoppingListItemId,
};
use business::domain::shopping_list::model::{
    ShoppingList, ShoppingListItem, ShoppingListItemPage, ShoppingListPagination,
    ShoppingListPermissionGroup, ShoppingListShares,
};
use business::domain::shopping_list::repository::ShoppingListRepository;

use super::entity::{
    ShoppingListCompanyBusinessUnitEntity, ShoppingListCompanyUserEntity, ShoppingListEntity,
    ShoppingListItemEntity, ShoppingListPermissionGroupEntity,
};
use crate::errors::map_sqlx_error;

pub(crate) const SELECT_SHOPPING_LIST: &str = "SELECT sl.id, sl.customer_reference, sl.name, c.first_name, c.last_name, sl.created_at, sl.updated_at FROM shopping_lists sl LEFT JOIN customers c ON c.customer_reference = sl.customer_reference";

pub(crate) const SELECT_SHOPPING_LIST_ITEM: &str = "SELECT id, fk_shopping_list, sku, quantity, id_company_user, attributes FROM shopping_list_items";

fn to_values<T: Copy>(ids: &[T], value: impl Fn(&T) -> i64) -> Vec<i64> {
    ids.iter().map(value).collect()
}

pub struct ShoppingListRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_items(
        &self,
        condition: &str,
        ids: Vec<i64>,
    ) -> Result<Vec<ShoppingListItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListItemEntity>(&format!(
            "{SELECT_SHOPPING_LIST_ITEM} WHERE {condition} ORDER BY id"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn fetch_shared_ids(
        &self,
        query: &str,
        id: i64,
    ) -> Result<Vec<ShoppingListId>, RepositoryError> {
        let ids = sqlx::query_scalar::<_, i64>(query)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(ids.into_iter().map(ShoppingListId::new).collect())
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositoryPostgres {
    async fn find_customer_shopping_list_by_name(
        &self,
        customer_reference: &CustomerReference,
        name: &str,
    ) -> Result<Option<ShoppingList>, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListEntity>(&format!(
            "{SELECT_SHOPPING_LIST} WHERE sl.customer_reference = $1 AND sl.name = $2"
        ))
        .bind(customer_reference.as_str())
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_shopping_list_by_id(
        &self,
        id: ShoppingListId,
    ) -> Result<Option<ShoppingList>, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListEntity>(&format!(
            "{SELECT_SHOPPING_LIST} WHERE sl.id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_customer_shopping_lists(
        &self,
        customer_reference: &CustomerReference,
    ) -> Result<Vec<ShoppingList>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListEntity>(&format!(
            "{SELECT_SHOPPING_LIST} WHERE sl.customer_reference = $1 ORDER BY sl.id"
        ))
        .bind(customer_reference.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_shopping_list_paginated_items(
        &self,
        id_shopping_list: ShoppingListId,
        pagination: ShoppingListPagination,
    ) -> Result<ShoppingListItemPage, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM shopping_list_items WHERE fk_shopping_list = $1",
        )
        .bind(id_shopping_list.value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let entities = sqlx::query_as::<_, ShoppingListItemEntity>(&format!(
            "{SELECT_SHOPPING_LIST_ITEM} WHERE fk_shopping_list = $1 ORDER BY id LIMIT $2 OFFSET $3"
        ))
        .bind(id_shopping_list.value())
        .bind(i64::from(pagination.items_per_page))
        .bind(i64::try_from(pagination.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(ShoppingListItemPage {
            items: entities.into_iter().map(|e| e.into_domain()).collect(),
            total: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn find_shopping_list_items_by_list_id(
        &self,
        id_shopping_list: ShoppingListId,
    ) -> Result<Vec<ShoppingListItem>, RepositoryError> {
        self.fetch_items("fk_shopping_list = ANY($1)", vec![id_shopping_list.value()])
            .await
    }

    async fn find_shopping_list_items_by_list_ids(
        &self,
        ids: &[ShoppingListId],
    ) -> Result<Vec<ShoppingListItem>, RepositoryError> {
        self.fetch_items("fk_shopping_list = ANY($1)", to_values(ids, ShoppingListId::value))
            .await
    }

    async fn find_shopping_list_items_by_ids(
        &self,
        ids: &[ShoppingListItemId],
    ) -> Result<Vec<ShoppingListItem>, RepositoryError> {
        self.fetch_items("id = ANY($1)", to_values(ids, ShoppingListItemId::value))
            .await
    }

    async fn find_shopping_list_shares(
        &self,
        id_shopping_list: ShoppingListId,
    ) -> Result<ShoppingListShares, RepositoryError> {
        let company_users = sqlx::query_as::<_, ShoppingListCompanyUserEntity>(
            "SELECT fk_shopping_list, fk_company_user, fk_shopping_list_permission_group FROM shopping_list_company_users WHERE fk_shopping_list = $1 ORDER BY id",
        )
        .bind(id_shopping_list.value())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let company_business_units = sqlx::query_as::<_, ShoppingListCompanyBusinessUnitEntity>(
            "SELECT fk_shopping_list, fk_company_business_unit, fk_shopping_list_permission_group FROM shopping_list_company_business_units WHERE fk_shopping_list = $1 ORDER BY id",
        )
        .bind(id_shopping_list.value())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(ShoppingListShares {
            company_users: company_users.into_iter().map(|e| e.into_domain()).collect(),
            company_business_units: company_business_units
                .into_iter()
                .map(|e| e.into_domain())
                .collect(),
        })
    }

    async fn find_company_user_shared_shopping_list_ids(
        &self,
        id_company_user: CompanyUserId,
    ) -> Result<Vec<ShoppingListId>, RepositoryError> {
        self.fetch_shared_ids(
            "SELECT fk_shopping_list FROM shopping_list_company_users WHERE fk_company_user = $1",
            id_company_user.value(),
        )
        .await
    }

    async fn find_company_business_unit_shared_shopping_list_ids(
        &self,
        id_company_business_unit: CompanyBusinessUnitId,
    ) -> Result<Vec<ShoppingListId>, RepositoryError> {
        self.fetch_shared_ids(
            "SELECT fk_shopping_list FROM shopping_list_company_business_units WHERE fk_company_business_unit = $1",
            id_company_business_unit.value(),
        )
        .await
    }

    async fn get_shopping_list_permission_group(
        &self,
    ) -> Result<ShoppingListPermissionGroup, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListPermissionGroupEntity>(
            "SELECT id, name FROM shopping_list_permission_groups ORDER BY id LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_shopping_list_permission_groups(
        &self,
    ) -> Result<Vec<ShoppingListPermissionGroup>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListPermissionGroupEntity>(
            "SELECT id, name FROM shopping_list_permission_groups ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

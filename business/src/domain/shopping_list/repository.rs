use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{
    CompanyBusinessUnitId, CompanyUserId, CustomerReference, ShoppingListId, ShoppingListItemId,
};

use super::model::{
    ShoppingList, ShoppingListItem, ShoppingListItemPage, ShoppingListPagination,
    ShoppingListPermissionGroup, ShoppingListShares,
};

/// Read access to lists, items and shares.
#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    async fn find_customer_shopping_list_by_name(
        &self,
        customer_reference: &CustomerReference,
        name: &str,
    ) -> Result<Option<ShoppingList>, RepositoryError>;
    async fn find_shopping_list_by_id(
        &self,
        id: ShoppingListId,
    ) -> Result<Option<ShoppingList>, RepositoryError>;
    async fn find_customer_shopping_lists(
        &self,
        customer_reference: &CustomerReference,
    ) -> Result<Vec<ShoppingList>, RepositoryError>;
    async fn find_shopping_list_paginated_items(
        &self,
        id_shopping_list: ShoppingListId,
        pagination: ShoppingListPagination,
    ) -> Result<ShoppingListItemPage, RepositoryError>;
    async fn find_shopping_list_items_by_list_id(
        &self,
        id_shopping_list: ShoppingListId,
    ) -> Result<Vec<ShoppingListItem>, RepositoryError>;
    async fn find_shopping_list_items_by_list_ids(
        &self,
        ids: &[ShoppingListId],
    ) -> Result<Vec<ShoppingListItem>, RepositoryError>;
    async fn find_shopping_list_items_by_ids(
        &self,
        ids: &[ShoppingListItemId],
    ) -> Result<Vec<ShoppingListItem>, RepositoryError>;
    async fn find_shopping_list_shares(
        &self,
        id_shopping_list: ShoppingListId,
    ) -> Result<ShoppingListShares, RepositoryError>;
    async fn find_company_user_shared_shopping_list_ids(
        &self,
        id_company_user: CompanyUserId,
    ) -> Result<Vec<ShoppingListId>, RepositoryError>;
    async fn find_company_business_unit_shared_shopping_list_ids(
        &self,
        id_company_business_unit: CompanyBusinessUnitId,
    ) -> Result<Vec<ShoppingListId>, RepositoryError>;
    async fn get_shopping_list_permission_group(
        &self,
    ) -> Result<ShoppingListPermissionGroup, RepositoryError>;
    async fn get_shopping_list_permission_groups(
        &self,
    ) -> Result<Vec<ShoppingListPermissionGroup>, RepositoryError>;
}

/// Write access to lists and items.
#[async_trait]
pub trait ShoppingListEntityManager: Send + Sync {
    /// Inserts a list. Fails with `RepositoryError::Duplicated` when the
    /// customer already owns a list with that name.
    async fn create_shopping_list(
        &self,
        shopping_list: &ShoppingList,
    ) -> Result<ShoppingList, RepositoryError>;
    /// Inserts or updates an item; the returned copy carries the stored id.
    async fn save_shopping_list_item(
        &self,
        item: &ShoppingListItem,
    ) -> Result<ShoppingListItem, RepositoryError>;
    async fn delete_shopping_list_item(&self, id: ShoppingListItemId)
    -> Result<(), RepositoryError>;
    async fn begin_item_transaction(
        &self,
    ) -> Result<Box<dyn ShoppingListItemTransaction>, RepositoryError>;
}

/// Unit of work for batched item writes. Dropping it without `commit`
/// discards every write.
#[async_trait]
pub trait ShoppingListItemTransaction: Send {
    async fn save_shopping_list_item(
        &mut self,
        item: &ShoppingListItem,
    ) -> Result<ShoppingListItem, RepositoryError>;
    async fn commit(&mut self) -> Result<(), RepositoryError>;
    async fn rollback(&mut self) -> Result<(), RepositoryError>;
}

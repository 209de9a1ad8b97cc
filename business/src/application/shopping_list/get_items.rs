use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{ShoppingListId, ShoppingListItemId};
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListItem;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_items::{
    GetShoppingListItemsUseCase, GetShoppingListsItemsUseCase,
};

pub struct GetShoppingListItemsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingListItemsUseCase for GetShoppingListItemsUseCaseImpl {
    async fn execute(
        &self,
        ids: &[ShoppingListItemId],
    ) -> Result<Vec<ShoppingListItem>, ShoppingListError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.logger
            .debug(&format!("Fetching {} shopping list items", ids.len()));
        Ok(self.repository.find_shopping_list_items_by_ids(ids).await?)
    }
}

pub struct GetShoppingListsItemsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingListsItemsUseCase for GetShoppingListsItemsUseCaseImpl {
    async fn execute(
        &self,
        ids: &[ShoppingListId],
    ) -> Result<Vec<ShoppingListItem>, ShoppingListError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.logger
            .debug(&format!("Fetching items of {} shopping lists", ids.len()));
        Ok(self
            .repository
            .find_shopping_list_items_by_list_ids(ids)
            .await?)
    }
}

use async_trait::async_trait;

use crate::domain::shared::value_objects::{ShoppingListId, ShoppingListItemId};
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListItem;

#[async_trait]
pub trait GetShoppingListItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        ids: &[ShoppingListItemId],
    ) -> Result<Vec<ShoppingListItem>, ShoppingListError>;
}

#[async_trait]
pub trait GetShoppingListsItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        ids: &[ShoppingListId],
    ) -> Result<Vec<ShoppingListItem>, ShoppingListError>;
}

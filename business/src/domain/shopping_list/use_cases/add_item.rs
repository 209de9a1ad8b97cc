use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListItem;

/// Adds one item. The returned item has no id when validation or the
/// write permission check rejected it.
#[async_trait]
pub trait AddShoppingListItemUseCase: Send + Sync {
    async fn execute(&self, item: ShoppingListItem) -> Result<ShoppingListItem, ShoppingListError>;
}

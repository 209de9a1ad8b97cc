use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListItem;

/// Saves an item after checking the actor's write permission on its list.
/// A denied save returns the item untouched.
#[async_trait]
pub trait SaveShoppingListItemUseCase: Send + Sync {
    async fn execute(&self, item: ShoppingListItem) -> Result<ShoppingListItem, ShoppingListError>;
}

/// Saves an item WITHOUT any permission check.
///
/// Reserved for trusted, system-initiated callers such as imports.
#[async_trait]
pub trait SaveShoppingListItemUncheckedUseCase: Send + Sync {
    async fn execute(&self, item: ShoppingListItem) -> Result<ShoppingListItem, ShoppingListError>;
}

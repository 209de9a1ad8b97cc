use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListPermissionGroup;

#[async_trait]
pub trait GetShoppingListPermissionGroupsUseCase: Send + Sync {
    /// The default group, i.e. the first one stored.
    async fn default_group(&self) -> Result<ShoppingListPermissionGroup, ShoppingListError>;
    async fn all_groups(&self) -> Result<Vec<ShoppingListPermissionGroup>, ShoppingListError>;
}

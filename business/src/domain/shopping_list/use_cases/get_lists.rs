use async_trait::async_trait;

use crate::domain::shared::value_objects::CustomerReference;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

#[async_trait]
pub trait GetShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        customer_reference: &CustomerReference,
        name: &str,
    ) -> Result<Option<ShoppingList>, ShoppingListError>;
}

#[async_trait]
pub trait GetCustomerShoppingListsUseCase: Send + Sync {
    async fn execute(
        &self,
        customer_reference: &CustomerReference,
    ) -> Result<Vec<ShoppingList>, ShoppingListError>;
}

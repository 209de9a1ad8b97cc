use async_trait::async_trait;

use crate::domain::shared::value_objects::ShoppingListId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{Customer, ShoppingListItem, ShoppingListResponse};

pub struct AddShoppingListItemsParams {
    pub customer: Customer,
    /// Target list; the customer's default list when absent.
    pub id_shopping_list: Option<ShoppingListId>,
    pub items: Vec<ShoppingListItem>,
}

#[async_trait]
pub trait AddShoppingListItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddShoppingListItemsParams,
    ) -> Result<ShoppingListResponse, ShoppingListError>;
}

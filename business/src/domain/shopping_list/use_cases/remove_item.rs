use async_trait::async_trait;

use crate::domain::shared::value_objects::{CompanyUserId, ShoppingListId, ShoppingListItemId};
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListItemResponse;

pub struct RemoveShoppingListItemParams {
    pub id_shopping_list_item: ShoppingListItemId,
    pub id_shopping_list: ShoppingListId,
    pub id_company_user: Option<CompanyUserId>,
}

#[async_trait]
pub trait RemoveShoppingListItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RemoveShoppingListItemParams,
    ) -> Result<ShoppingListItemResponse, ShoppingListError>;
}

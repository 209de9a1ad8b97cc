use async_trait::async_trait;

use crate::domain::shared::value_objects::{CompanyUserId, ShoppingListId};
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListResponse;

pub struct ClearShoppingListParams {
    pub id_shopping_list: ShoppingListId,
    pub id_company_user: Option<CompanyUserId>,
}

#[async_trait]
pub trait ClearShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ClearShoppingListParams,
    ) -> Result<ShoppingListResponse, ShoppingListError>;
}

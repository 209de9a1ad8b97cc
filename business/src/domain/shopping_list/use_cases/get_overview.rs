use async_trait::async_trait;

use crate::domain::shared::value_objects::CustomerReference;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{ShoppingListOverview, ShoppingListPagination};

pub struct GetShoppingListOverviewParams {
    pub customer_reference: CustomerReference,
    pub name: String,
    pub pagination: ShoppingListPagination,
}

#[async_trait]
pub trait GetShoppingListOverviewUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetShoppingListOverviewParams,
    ) -> Result<ShoppingListOverview, ShoppingListError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListResponse;
use crate::domain::shopping_list::repository::{ShoppingListEntityManager, ShoppingListRepository};
use crate::domain::shopping_list::use_cases::clear::{
    ClearShoppingListParams, ClearShoppingListUseCase,
};

use super::write_permission::ShoppingListPermissionGate;

pub struct ClearShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub entity_manager: Arc<dyn ShoppingListEntityManager>,
    pub gate: Arc<ShoppingListPermissionGate>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearShoppingListUseCase for ClearShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: ClearShoppingListParams,
    ) -> Result<ShoppingListResponse, ShoppingListError> {
        let Some(shopping_list) = self
            .repository
            .find_shopping_list_by_id(params.id_shopping_list)
            .await?
        else {
            self.logger.info(&format!(
                "Shopping list {} not found, nothing cleared",
                params.id_shopping_list
            ));
            return Ok(ShoppingListResponse::failed());
        };

        if !self.gate.check_write(&shopping_list, params.id_company_user) {
            self.logger.info(&format!(
                "Write permission denied on shopping list {} for company user {:?}",
                params.id_shopping_list, params.id_company_user
            ));
            return Ok(ShoppingListResponse::failed());
        }

        let items = self
            .repository
            .find_shopping_list_items_by_list_id(params.id_shopping_list)
            .await?;
        for item in &items {
            if let Some(id) = item.id {
                self.entity_manager.delete_shopping_list_item(id).await?;
            }
        }

        self.logger.info(&format!(
            "Cleared {} items from shopping list {}",
            items.len(),
            params.id_shopping_list
        ));

        Ok(ShoppingListResponse::succeeded(Some(
            shopping_list.with_company_user(params.id_company_user),
        )))
    }
}

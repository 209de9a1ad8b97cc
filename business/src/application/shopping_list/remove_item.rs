use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListItemResponse;
use crate::domain::shopping_list::repository::{ShoppingListEntityManager, ShoppingListRepository};
use crate::domain::shopping_list::use_cases::remove_item::{
    RemoveShoppingListItemParams, RemoveShoppingListItemUseCase,
};

use super::write_permission::ShoppingListPermissionGate;

pub struct RemoveShoppingListItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub entity_manager: Arc<dyn ShoppingListEntityManager>,
    pub gate: Arc<ShoppingListPermissionGate>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveShoppingListItemUseCase for RemoveShoppingListItemUseCaseImpl {
    async fn execute(
        &self,
        params: RemoveShoppingListItemParams,
    ) -> Result<ShoppingListItemResponse, ShoppingListError> {
        let shopping_list = self
            .repository
            .find_shopping_list_by_id(params.id_shopping_list)
            .await?;

        // A missing list and a denied one look the same to the caller.
        let allowed = shopping_list
            .as_ref()
            .is_some_and(|list| self.gate.check_write(list, params.id_company_user));
        if !allowed {
            self.logger.info(&format!(
                "Item {} not removed from shopping list {}",
                params.id_shopping_list_item, params.id_shopping_list
            ));
            return Ok(ShoppingListItemResponse { is_success: false });
        }

        // The item must live in the list the permission was checked against.
        let belongs_to_list = self
            .repository
            .find_shopping_list_items_by_ids(&[params.id_shopping_list_item])
            .await?
            .iter()
            .any(|item| item.fk_shopping_list == Some(params.id_shopping_list));
        if !belongs_to_list {
            self.logger.warn(&format!(
                "Item {} is not part of shopping list {}",
                params.id_shopping_list_item, params.id_shopping_list
            ));
            return Ok(ShoppingListItemResponse { is_success: false });
        }

        self.entity_manager
            .delete_shopping_list_item(params.id_shopping_list_item)
            .await?;

        Ok(ShoppingListItemResponse { is_success: true })
    }
}

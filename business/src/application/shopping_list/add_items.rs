use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::messenger::Messenger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{
    ShoppingList, ShoppingListItem, ShoppingListResponse,
};
use crate::domain::shopping_list::repository::{
    ShoppingListEntityManager, ShoppingListItemTransaction,
};
use crate::domain::shopping_list::use_cases::add_items::{
    AddShoppingListItemsParams, AddShoppingListItemsUseCase,
};
use crate::domain::shopping_list::use_cases::resolve_default::{
    ResolveDefaultShoppingListUseCase, ResolvedShoppingList,
};

use super::item_validator::ShoppingListItemValidator;
use super::messages;
use super::write_permission::ShoppingListPermissionGate;

/// Items stored by a batch, and whether every item made it.
struct BatchOutcome {
    is_success: bool,
    saved_skus: Vec<String>,
}

pub struct AddShoppingListItemsUseCaseImpl {
    pub validator: Arc<ShoppingListItemValidator>,
    pub resolver: Arc<dyn ResolveDefaultShoppingListUseCase>,
    pub gate: Arc<ShoppingListPermissionGate>,
    pub entity_manager: Arc<dyn ShoppingListEntityManager>,
    pub messenger: Arc<dyn Messenger>,
    pub logger: Arc<dyn Logger>,
}

impl AddShoppingListItemsUseCaseImpl {
    async fn create_items(
        &self,
        transaction: &mut dyn ShoppingListItemTransaction,
        shopping_list: &ShoppingList,
        items: Vec<ShoppingListItem>,
    ) -> Result<BatchOutcome, ShoppingListError> {
        let mut outcome = BatchOutcome {
            is_success: true,
            saved_skus: Vec::new(),
        };

        for mut item in items {
            if !self.validator.assert_item(&item).await? {
                outcome.is_success = false;
                continue;
            }

            item.fk_shopping_list = shopping_list.id;
            let saved = transaction.save_shopping_list_item(&item).await?;
            if !saved.is_persisted() {
                outcome.is_success = false;
                self.messenger
                    .add_error_message(messages::item_add_failed(&saved.sku));
                continue;
            }

            outcome.saved_skus.push(saved.sku);
        }

        Ok(outcome)
    }
}

#[async_trait]
impl AddShoppingListItemsUseCase for AddShoppingListItemsUseCaseImpl {
    async fn execute(
        &self,
        params: AddShoppingListItemsParams,
    ) -> Result<ShoppingListResponse, ShoppingListError> {
        let company_user = params
            .customer
            .company_user
            .ok_or(ShoppingListError::CompanyUserRequired)?;
        let customer_reference = params.customer.customer_reference;
        if customer_reference.is_blank() {
            return Err(ShoppingListError::CustomerRequired);
        }
        let actor = Some(company_user.id_company_user);

        self.logger.info(&format!(
            "Adding {} items to shopping list {:?} for company user {}",
            params.items.len(),
            params.id_shopping_list,
            company_user.id_company_user
        ));

        let resolved = match params.id_shopping_list {
            Some(id) => ResolvedShoppingList::Existing(ShoppingList::reference(
                id,
                customer_reference.clone(),
            )),
            None => self.resolver.execute(&customer_reference).await?,
        };

        if !self.gate.check_write_resolved(&resolved, actor) {
            self.logger.info(&format!(
                "Write permission denied on shopping list {:?} for company user {}",
                resolved.shopping_list().id,
                company_user.id_company_user
            ));
            return Ok(ShoppingListResponse::failed());
        }

        if resolved.is_new()
            && let Some(id_shopping_list) = resolved.shopping_list().id
        {
            self.gate
                .grant_ownership(id_shopping_list, company_user.id_company_user);
        }
        let shopping_list = resolved.into_shopping_list().with_company_user(actor);

        let mut transaction = self.entity_manager.begin_item_transaction().await?;
        let outcome = match self
            .create_items(transaction.as_mut(), &shopping_list, params.items)
            .await
        {
            Ok(outcome) => outcome,
            Err(err) => {
                if let Err(rollback_err) = transaction.rollback().await {
                    self.logger
                        .error(&format!("Rollback of item batch failed: {}", rollback_err));
                }
                self.logger
                    .error(&format!("Item batch aborted: {}", err));
                return Err(err);
            }
        };
        transaction.commit().await?;

        for sku in &outcome.saved_skus {
            self.messenger
                .add_success_message(messages::item_add_success(sku));
        }

        Ok(ShoppingListResponse {
            is_success: outcome.is_success,
            shopping_list: Some(shopping_list),
        })
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CustomerReference;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_lists::{
    GetCustomerShoppingListsUseCase, GetShoppingListUseCase,
};

pub struct GetShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingListUseCase for GetShoppingListUseCaseImpl {
    async fn execute(
        &self,
        customer_reference: &CustomerReference,
        name: &str,
    ) -> Result<Option<ShoppingList>, ShoppingListError> {
        self.logger.debug(&format!(
            "Fetching shopping list '{}' of customer {}",
            name, customer_reference
        ));
        Ok(self
            .repository
            .find_customer_shopping_list_by_name(customer_reference, name)
            .await?)
    }
}

pub struct GetCustomerShoppingListsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCustomerShoppingListsUseCase for GetCustomerShoppingListsUseCaseImpl {
    async fn execute(
        &self,
        customer_reference: &CustomerReference,
    ) -> Result<Vec<ShoppingList>, ShoppingListError> {
        self.logger.debug(&format!(
            "Fetching shopping lists of customer {}",
            customer_reference
        ));
        Ok(self
            .repository
            .find_customer_shopping_lists(customer_reference)
            .await?)
    }
}

use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::Customer;

#[async_trait]
pub trait ExpandCustomerPermissionsUseCase: Send + Sync {
    async fn execute(&self, customer: Customer) -> Result<Customer, ShoppingListError>;
}

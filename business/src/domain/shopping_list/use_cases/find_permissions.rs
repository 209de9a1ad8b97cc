use async_trait::async_trait;

use crate::domain::shared::value_objects::CustomerReference;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::CompanyUser;
use crate::domain::shopping_list::permission::PermissionCollection;

#[async_trait]
pub trait FindCompanyUserPermissionsUseCase: Send + Sync {
    async fn execute(
        &self,
        company_user: &CompanyUser,
        customer_reference: &CustomerReference,
    ) -> Result<PermissionCollection, ShoppingListError>;
}

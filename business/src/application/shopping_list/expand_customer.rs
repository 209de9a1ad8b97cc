use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::Customer;
use crate::domain::shopping_list::permission::{PermissionEngine, PermissionKind};
use crate::domain::shopping_list::use_cases::expand_customer::ExpandCustomerPermissionsUseCase;
use crate::domain::shopping_list::use_cases::find_permissions::FindCompanyUserPermissionsUseCase;

/// Attaches shopping list grants to a customer session and mirrors them
/// into the permission engine.
pub struct ExpandCustomerPermissionsUseCaseImpl {
    pub find_permissions: Arc<dyn FindCompanyUserPermissionsUseCase>,
    pub permission_engine: Arc<dyn PermissionEngine>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExpandCustomerPermissionsUseCase for ExpandCustomerPermissionsUseCaseImpl {
    async fn execute(&self, mut customer: Customer) -> Result<Customer, ShoppingListError> {
        let Some(company_user) = customer.company_user else {
            return Ok(customer);
        };

        let collection = self
            .find_permissions
            .execute(&company_user, &customer.customer_reference)
            .await?;

        for kind in [PermissionKind::Read, PermissionKind::Write] {
            self.permission_engine
                .revoke(kind.plugin_key(), company_user.id_company_user);
            if let Some(permission) = collection.find(kind) {
                self.permission_engine.grant(
                    kind.plugin_key(),
                    company_user.id_company_user,
                    &permission.shopping_list_ids(),
                );
            }
        }

        self.logger.debug(&format!(
            "Shopping list permissions refreshed for company user {}",
            company_user.id_company_user
        ));

        for permission in collection.permissions {
            customer.permissions.add_permission(permission);
        }

        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::shopping_list::find_permissions::FindCompanyUserPermissionsUseCaseImpl;
    use crate::application::test_support::{
        InMemoryPermissions, InMemoryShoppingLists, customer, mock_logger,
    };
    use crate::domain::shared::value_objects::{
        CompanyBusinessUnitId, CompanyUserId, CustomerReference, ShoppingListId,
    };
    use crate::domain::shopping_list::model::CompanyUser;
    use crate::domain::shopping_list::permission::{
        READ_SHOPPING_LIST_PERMISSION_PLUGIN_KEY, WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY,
    };
    use std::collections::BTreeSet;

    fn company_user() -> CompanyUser {
        CompanyUser {
            id_company_user: CompanyUserId::new(7),
            id_company_business_unit: CompanyBusinessUnitId::new(3),
        }
    }

    fn use_case(
        store: Arc<InMemoryShoppingLists>,
        permissions: Arc<InMemoryPermissions>,
    ) -> ExpandCustomerPermissionsUseCaseImpl {
        ExpandCustomerPermissionsUseCaseImpl {
            find_permissions: Arc::new(FindCompanyUserPermissionsUseCaseImpl {
                repository: store,
                logger: mock_logger(),
            }),
            permission_engine: permissions,
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_append_grants_and_sync_engine() {
        let store = Arc::new(InMemoryShoppingLists::new());
        let permissions = Arc::new(InMemoryPermissions::default());
        let own = store.seed_list(&customer(), "Party");
        let shared = store.seed_list(&CustomerReference::new("DE--2"), "Office");
        store.share_with_business_unit(shared, CompanyBusinessUnitId::new(3));

        let expanded = use_case(store, permissions.clone())
            .execute(Customer::new(customer()).with_company_user(company_user()))
            .await
            .unwrap();

        assert_eq!(expanded.permissions.permissions.len(), 2);
        assert_eq!(
            permissions.granted(READ_SHOPPING_LIST_PERMISSION_PLUGIN_KEY, CompanyUserId::new(7)),
            BTreeSet::from([own, shared])
        );
        assert_eq!(
            permissions.granted(WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY, CompanyUserId::new(7)),
            BTreeSet::from([own])
        );
    }

    #[tokio::test]
    async fn should_replace_stale_grants() {
        let store = Arc::new(InMemoryShoppingLists::new());
        let permissions = Arc::new(InMemoryPermissions::default());
        permissions.grant(
            WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY,
            CompanyUserId::new(7),
            &[ShoppingListId::new(99)],
        );
        let own = store.seed_list(&customer(), "Party");

        use_case(store, permissions.clone())
            .execute(Customer::new(customer()).with_company_user(company_user()))
            .await
            .unwrap();

        assert_eq!(
            permissions.granted(WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY, CompanyUserId::new(7)),
            BTreeSet::from([own])
        );
    }

    #[tokio::test]
    async fn should_leave_customer_without_company_user_unchanged() {
        let store = Arc::new(InMemoryShoppingLists::new());
        store.seed_list(&customer(), "Party");
        let plain = Customer::new(customer());

        let expanded = use_case(store, Arc::new(InMemoryPermissions::default()))
            .execute(plain.clone())
            .await
            .unwrap();

        assert_eq!(expanded, plain);
    }
}

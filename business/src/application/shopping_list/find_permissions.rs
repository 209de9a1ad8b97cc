use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{CustomerReference, ShoppingListId};
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::CompanyUser;
use crate::domain::shopping_list::permission::{
    Permission, PermissionCollection, PermissionKind,
};
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::find_permissions::FindCompanyUserPermissionsUseCase;

/// Builds the read and write grants of a company user.
///
/// Read covers the customer's own lists plus every list shared with the
/// company user or with its business unit. Write covers own lists only.
pub fn build_permission_collection(
    own: impl IntoIterator<Item = ShoppingListId>,
    shared_with_company_user: impl IntoIterator<Item = ShoppingListId>,
    shared_with_business_unit: impl IntoIterator<Item = ShoppingListId>,
) -> PermissionCollection {
    let own: BTreeSet<ShoppingListId> = own.into_iter().collect();
    let readable: BTreeSet<ShoppingListId> = own
        .iter()
        .copied()
        .chain(shared_with_company_user)
        .chain(shared_with_business_unit)
        .collect();

    let mut collection = PermissionCollection::default();
    collection.add_permission(Permission::shopping_list_grant(
        PermissionKind::Read,
        &readable,
    ));
    collection.add_permission(Permission::shopping_list_grant(PermissionKind::Write, &own));
    collection
}

pub struct FindCompanyUserPermissionsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindCompanyUserPermissionsUseCase for FindCompanyUserPermissionsUseCaseImpl {
    async fn execute(
        &self,
        company_user: &CompanyUser,
        customer_reference: &CustomerReference,
    ) -> Result<PermissionCollection, ShoppingListError> {
        self.logger.debug(&format!(
            "Computing shopping list permissions for company user {}",
            company_user.id_company_user
        ));

        let own = self
            .repository
            .find_customer_shopping_lists(customer_reference)
            .await?
            .into_iter()
            .filter_map(|list| list.id);
        let shared_with_company_user = self
            .repository
            .find_company_user_shared_shopping_list_ids(company_user.id_company_user)
            .await?;
        let shared_with_business_unit = self
            .repository
            .find_company_business_unit_shared_shopping_list_ids(
                company_user.id_company_business_unit,
            )
            .await?;

        Ok(build_permission_collection(
            own,
            shared_with_company_user,
            shared_with_business_unit,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{InMemoryShoppingLists, customer, mock_logger};
    use crate::domain::shared::value_objects::{CompanyBusinessUnitId, CompanyUserId};
    use proptest::prelude::*;

    fn ids(values: &[i64]) -> Vec<ShoppingListId> {
        values.iter().copied().map(ShoppingListId::new).collect()
    }

    fn company_user() -> CompanyUser {
        CompanyUser {
            id_company_user: CompanyUserId::new(10),
            id_company_business_unit: CompanyBusinessUnitId::new(20),
        }
    }

    #[tokio::test]
    async fn should_union_own_and_shared_lists_for_read() {
        let store = Arc::new(InMemoryShoppingLists::new());
        let own = store.seed_list(&customer(), "Own");
        let other = CustomerReference::new("DE--2");
        let shared_user = store.seed_list(&other, "Shared with me");
        let shared_unit = store.seed_list(&other, "Shared with my unit");
        let unrelated = store.seed_list(&other, "Private");
        store.share_with_company_user(shared_user, CompanyUserId::new(10));
        store.share_with_business_unit(shared_unit, CompanyBusinessUnitId::new(20));
        store.share_with_business_unit(own, CompanyBusinessUnitId::new(20));

        let use_case = FindCompanyUserPermissionsUseCaseImpl {
            repository: store,
            logger: mock_logger(),
        };

        let permissions = use_case
            .execute(&company_user(), &customer())
            .await
            .unwrap();

        let read = permissions.find(PermissionKind::Read).unwrap();
        let write = permissions.find(PermissionKind::Write).unwrap();
        assert_eq!(read.shopping_list_ids(), vec![own, shared_user, shared_unit]);
        assert_eq!(write.shopping_list_ids(), vec![own]);
        assert!(!read.shopping_list_ids().contains(&unrelated));
    }

    #[tokio::test]
    async fn should_emit_empty_grants_when_user_has_no_lists() {
        let use_case = FindCompanyUserPermissionsUseCaseImpl {
            repository: Arc::new(InMemoryShoppingLists::new()),
            logger: mock_logger(),
        };

        let permissions = use_case
            .execute(&company_user(), &customer())
            .await
            .unwrap();

        assert_eq!(permissions.permissions.len(), 2);
        assert!(permissions
            .permissions
            .iter()
            .all(|p| p.shopping_list_ids().is_empty()));
    }

    #[test]
    fn should_collapse_duplicates() {
        let collection = build_permission_collection(ids(&[1, 2]), ids(&[2, 3]), ids(&[3, 1]));

        assert_eq!(
            collection
                .find(PermissionKind::Read)
                .unwrap()
                .shopping_list_ids(),
            ids(&[1, 2, 3])
        );
    }

    proptest! {
        #[test]
        fn write_is_own_and_read_covers_all_sources(
            own in proptest::collection::vec(1i64..50, 0..10),
            user in proptest::collection::vec(1i64..50, 0..10),
            unit in proptest::collection::vec(1i64..50, 0..10),
        ) {
            let collection = build_permission_collection(ids(&own), ids(&user), ids(&unit));
            let read: BTreeSet<_> = collection.find(PermissionKind::Read).unwrap().shopping_list_ids().into_iter().collect();
            let write: BTreeSet<_> = collection.find(PermissionKind::Write).unwrap().shopping_list_ids().into_iter().collect();
            let own: BTreeSet<_> = ids(&own).into_iter().collect();

            prop_assert_eq!(&write, &own);
            prop_assert!(write.is_subset(&read));
            for id in ids(&user).into_iter().chain(ids(&unit)) {
                prop_assert!(read.contains(&id));
            }
        }
    }
}

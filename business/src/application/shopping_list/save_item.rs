use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListItem;
use crate::domain::shopping_list::permission::PermissionKind;
use crate::domain::shopping_list::repository::{ShoppingListEntityManager, ShoppingListRepository};
use crate::domain::shopping_list::use_cases::save_item::{
    SaveShoppingListItemUncheckedUseCase, SaveShoppingListItemUseCase,
};

use super::write_permission::ShoppingListPermissionGate;

pub struct SaveShoppingListItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub entity_manager: Arc<dyn ShoppingListEntityManager>,
    pub gate: Arc<ShoppingListPermissionGate>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveShoppingListItemUseCase for SaveShoppingListItemUseCaseImpl {
    async fn execute(&self, item: ShoppingListItem) -> Result<ShoppingListItem, ShoppingListError> {
        if !self
            .gate
            .check(PermissionKind::Write, item.fk_shopping_list, item.id_company_user)
        {
            self.logger.info(&format!(
                "Write permission denied saving item {} on shopping list {:?}",
                item.sku, item.fk_shopping_list
            ));
            return Ok(item);
        }

        if let Some(id) = item.id {
            // An update must also be allowed on the list the item is stored in.
            let stored_list = self
                .repository
                .find_shopping_list_items_by_ids(&[id])
                .await?
                .into_iter()
                .next()
                .and_then(|stored| stored.fk_shopping_list);
            let allowed = stored_list.is_some_and(|list| {
                self.gate
                    .check(PermissionKind::Write, Some(list), item.id_company_user)
            });
            if !allowed {
                self.logger.info(&format!(
                    "Write permission denied on stored shopping list of item {id}"
                ));
                return Ok(item);
            }
        }

        Ok(self.entity_manager.save_shopping_list_item(&item).await?)
    }
}

pub struct SaveShoppingListItemUncheckedUseCaseImpl {
    pub entity_manager: Arc<dyn ShoppingListEntityManager>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveShoppingListItemUncheckedUseCase for SaveShoppingListItemUncheckedUseCaseImpl {
    async fn execute(&self, item: ShoppingListItem) -> Result<ShoppingListItem, ShoppingListError> {
        self.logger.debug(&format!(
            "Saving item {} on shopping list {:?} without permission check",
            item.sku, item.fk_shopping_list
        ));

        Ok(self.entity_manager.save_shopping_list_item(&item).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        InMemoryPermissions, InMemoryShoppingLists, MockEntityManager, customer, mock_logger,
    };
    use crate::domain::shared::value_objects::{CompanyUserId, CustomerReference, ShoppingListItemId};
    use crate::domain::shopping_list::permission::{
        PermissionEngine, WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY,
    };

    #[tokio::test]
    async fn should_save_item_with_write_permission() {
        let store = Arc::new(InMemoryShoppingLists::new());
        let permissions = Arc::new(InMemoryPermissions::default());
        let list = store.seed_list(&customer(), "Party");
        let actor = CompanyUserId::new(1);
        permissions.grant(WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY, actor, &[list]);
        let use_case = SaveShoppingListItemUseCaseImpl {
            repository: store.clone(),
            entity_manager: store.clone(),
            gate: Arc::new(ShoppingListPermissionGate::new(permissions)),
            logger: mock_logger(),
        };
        let item = ShoppingListItem::new("A", 2)
            .in_list(list)
            .for_customer(customer(), Some(actor));

        let saved = use_case.execute(item).await.unwrap();

        assert!(saved.is_persisted());
        assert_eq!(store.items().len(), 1);
    }

    #[tokio::test]
    async fn should_return_item_untouched_when_denied() {
        let store = Arc::new(InMemoryShoppingLists::new());
        let list = store.seed_list(&customer(), "Party");
        let mut entity_manager = MockEntityManager::new();
        entity_manager.expect_save_shopping_list_item().never();
        let use_case = SaveShoppingListItemUseCaseImpl {
            repository: store.clone(),
            entity_manager: Arc::new(entity_manager),
            gate: Arc::new(ShoppingListPermissionGate::new(Arc::new(
                InMemoryPermissions::default(),
            ))),
            logger: mock_logger(),
        };
        let item = ShoppingListItem::new("A", 2)
            .in_list(list)
            .for_customer(customer(), Some(CompanyUserId::new(1)));

        let result = use_case.execute(item.clone()).await.unwrap();

        assert_eq!(result, item);
    }

    #[tokio::test]
    async fn should_not_move_item_out_of_a_foreign_list() {
        let store = Arc::new(InMemoryShoppingLists::new());
        let permissions = Arc::new(InMemoryPermissions::default());
        let own_list = store.seed_list(&customer(), "Party");
        let foreign_list = store.seed_list(&CustomerReference::new("DE--9"), "Party");
        let foreign_item = store.seed_item(foreign_list, "A");
        let actor = CompanyUserId::new(1);
        permissions.grant(WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY, actor, &[own_list]);
        let use_case = SaveShoppingListItemUseCaseImpl {
            repository: store.clone(),
            entity_manager: store.clone(),
            gate: Arc::new(ShoppingListPermissionGate::new(permissions)),
            logger: mock_logger(),
        };
        let mut item = ShoppingListItem::new("A", 5)
            .in_list(own_list)
            .for_customer(customer(), Some(actor));
        item.id = Some(foreign_item);

        let result = use_case.execute(item.clone()).await.unwrap();

        assert_eq!(result, item);
        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].fk_shopping_list, Some(foreign_list));
        assert_eq!(items[0].quantity, 1);
    }

    #[tokio::test]
    async fn should_update_stored_item_in_own_list() {
        let store = Arc::new(InMemoryShoppingLists::new());
        let permissions = Arc::new(InMemoryPermissions::default());
        let list = store.seed_list(&customer(), "Party");
        let stored = store.seed_item(list, "A");
        let actor = CompanyUserId::new(1);
        permissions.grant(WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY, actor, &[list]);
        let use_case = SaveShoppingListItemUseCaseImpl {
            repository: store.clone(),
            entity_manager: store.clone(),
            gate: Arc::new(ShoppingListPermissionGate::new(permissions)),
            logger: mock_logger(),
        };
        let mut item = ShoppingListItem::new("A", 4)
            .in_list(list)
            .for_customer(customer(), Some(actor));
        item.id = Some(stored);

        use_case.execute(item).await.unwrap();

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 4);
    }

    #[tokio::test]
    async fn should_deny_update_of_unknown_item() {
        let store = Arc::new(InMemoryShoppingLists::new());
        let permissions = Arc::new(InMemoryPermissions::default());
        let list = store.seed_list(&customer(), "Party");
        let actor = CompanyUserId::new(1);
        permissions.grant(WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY, actor, &[list]);
        let use_case = SaveShoppingListItemUseCaseImpl {
            repository: store.clone(),
            entity_manager: store.clone(),
            gate: Arc::new(ShoppingListPermissionGate::new(permissions)),
            logger: mock_logger(),
        };
        let mut item = ShoppingListItem::new("A", 4)
            .in_list(list)
            .for_customer(customer(), Some(actor));
        item.id = Some(ShoppingListItemId::new(404));

        use_case.execute(item).await.unwrap();

        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn should_save_without_permission_when_unchecked() {
        let store = Arc::new(InMemoryShoppingLists::new());
        let list = store.seed_list(&customer(), "Party");
        let use_case = SaveShoppingListItemUncheckedUseCaseImpl {
            entity_manager: store.clone(),
            logger: mock_logger(),
        };

        let saved = use_case
            .execute(ShoppingListItem::new("A", 1).in_list(list))
            .await
            .unwrap();

        assert!(saved.is_persisted());
        assert_eq!(store.items()[0].fk_shopping_list, Some(list));
    }
}

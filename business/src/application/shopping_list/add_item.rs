use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::messenger::Messenger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListItem;
use crate::domain::shopping_list::permission::PermissionKind;
use crate::domain::shopping_list::repository::ShoppingListEntityManager;
use crate::domain::shopping_list::use_cases::add_item::AddShoppingListItemUseCase;
use crate::domain::shopping_list::use_cases::resolve_default::ResolveDefaultShoppingListUseCase;

use super::item_validator::ShoppingListItemValidator;
use super::messages;
use super::write_permission::ShoppingListPermissionGate;

pub struct AddShoppingListItemUseCaseImpl {
    pub validator: Arc<ShoppingListItemValidator>,
    pub resolver: Arc<dyn ResolveDefaultShoppingListUseCase>,
    pub gate: Arc<ShoppingListPermissionGate>,
    pub entity_manager: Arc<dyn ShoppingListEntityManager>,
    pub messenger: Arc<dyn Messenger>,
    pub logger: Arc<dyn Logger>,
}

impl AddShoppingListItemUseCaseImpl {
    /// Attaches the target list to the item and tells whether the actor
    /// may write it.
    async fn resolve_target(
        &self,
        item: &mut ShoppingListItem,
    ) -> Result<bool, ShoppingListError> {
        if let Some(id_shopping_list) = item.fk_shopping_list {
            return Ok(self.gate.check(
                PermissionKind::Write,
                Some(id_shopping_list),
                item.id_company_user,
            ));
        }

        let customer_reference = item
            .customer_reference
            .clone()
            .ok_or(ShoppingListError::CustomerRequired)?;
        let resolved = self.resolver.execute(&customer_reference).await?;
        item.fk_shopping_list = resolved.shopping_list().id;

        if resolved.is_new()
            && let (Some(id_shopping_list), Some(owner)) =
                (item.fk_shopping_list, item.id_company_user)
        {
            self.gate.grant_ownership(id_shopping_list, owner);
        }

        Ok(self
            .gate
            .check_write_resolved(&resolved, item.id_company_user))
    }
}

#[async_trait]
impl AddShoppingListItemUseCase for AddShoppingListItemUseCaseImpl {
    async fn execute(
        &self,
        mut item: ShoppingListItem,
    ) -> Result<ShoppingListItem, ShoppingListError> {
        self.logger
            .info(&format!("Adding shopping list item: {}", item.sku));

        if !self.validator.assert_item(&item).await? {
            return Ok(item);
        }

        if !self.resolve_target(&mut item).await? {
            self.logger.info(&format!(
                "Write permission denied on shopping list {:?} for company user {:?}",
                item.fk_shopping_list, item.id_company_user
            ));
            return Ok(item);
        }

        let saved = self.entity_manager.save_shopping_list_item(&item).await?;
        if saved.is_persisted() {
            self.messenger
                .add_success_message(messages::item_add_success(&saved.sku));
        }

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::shopping_list::resolve_default::ResolveDefaultShoppingListUseCaseImpl;
    use crate::application::test_support::{
        InMemoryPermissions, InMemoryShoppingLists, RecordingMessenger, StaticCatalog, customer,
        mock_logger,
    };
    use crate::domain::shared::value_objects::{CompanyUserId, ShoppingListId};
    use crate::domain::shopping_list::model::DEFAULT_SHOPPING_LIST_NAME;
    use crate::domain::shopping_list::permission::{
        PermissionEngine, WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY,
    };
    use crate::domain::shopping_list::repository::ShoppingListRepository;

    struct Fixture {
        store: Arc<InMemoryShoppingLists>,
        permissions: Arc<InMemoryPermissions>,
        messenger: Arc<RecordingMessenger>,
        use_case: AddShoppingListItemUseCaseImpl,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryShoppingLists::new());
        let permissions = Arc::new(InMemoryPermissions::default());
        let messenger = Arc::new(RecordingMessenger::default());
        let use_case = AddShoppingListItemUseCaseImpl {
            validator: Arc::new(ShoppingListItemValidator {
                catalog: Arc::new(StaticCatalog::with_skus(&["A", "B"])),
                pre_check_plugins: Vec::new(),
                messenger: messenger.clone(),
                logger: mock_logger(),
            }),
            resolver: Arc::new(ResolveDefaultShoppingListUseCaseImpl::new(
                store.clone(),
                store.clone(),
                mock_logger(),
            )),
            gate: Arc::new(ShoppingListPermissionGate::new(permissions.clone())),
            entity_manager: store.clone(),
            messenger: messenger.clone(),
            logger: mock_logger(),
        };

        Fixture {
            store,
            permissions,
            messenger,
            use_case,
        }
    }

    fn actor() -> CompanyUserId {
        CompanyUserId::new(7)
    }

    #[tokio::test]
    async fn should_add_item_to_newly_created_default_list() {
        let f = fixture();
        let item = ShoppingListItem::new("A", 2).for_customer(customer(), Some(actor()));

        let saved = f.use_case.execute(item).await.unwrap();

        assert!(saved.is_persisted());
        let lists = f.store.lists();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, DEFAULT_SHOPPING_LIST_NAME);
        assert_eq!(saved.fk_shopping_list, lists[0].id);
        assert_eq!(f.messenger.success_values(), vec![messages::GLOSSARY_KEY_ITEM_ADD_SUCCESS]);
        assert!(f.permissions.can(
            WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY,
            actor(),
            lists[0].id.unwrap()
        ));
    }

    #[tokio::test]
    async fn should_round_trip_sku_and_quantity() {
        let f = fixture();
        let item = ShoppingListItem::new("B", 5).for_customer(customer(), Some(actor()));

        let saved = f.use_case.execute(item).await.unwrap();
        let fetched = f
            .store
            .find_shopping_list_items_by_ids(&[saved.id.unwrap()])
            .await
            .unwrap();

        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].sku, "B");
        assert_eq!(fetched[0].quantity, 5);
    }

    #[tokio::test]
    async fn should_return_item_unpersisted_when_sku_unknown() {
        let f = fixture();
        let item = ShoppingListItem::new("Z", 1).for_customer(customer(), Some(actor()));

        let result = f.use_case.execute(item).await.unwrap();

        assert!(!result.is_persisted());
        assert!(f.store.items().is_empty());
        assert!(f.store.lists().is_empty());
        assert_eq!(f.messenger.error_values(), vec![messages::GLOSSARY_KEY_ITEM_ADD_FAILED]);
    }

    #[tokio::test]
    async fn should_silently_skip_explicit_list_without_write_permission() {
        let f = fixture();
        let other = f.store.seed_list(&customer(), "Office");
        let item = ShoppingListItem::new("A", 1)
            .in_list(other)
            .for_customer(customer(), Some(actor()));

        let result = f.use_case.execute(item).await.unwrap();

        assert!(!result.is_persisted());
        assert!(f.store.items().is_empty());
        assert!(f.messenger.success_values().is_empty());
        assert!(f.messenger.error_values().is_empty());
    }

    #[tokio::test]
    async fn should_add_to_explicit_list_with_write_permission() {
        let f = fixture();
        let list = f.store.seed_list(&customer(), "Office");
        f.permissions
            .grant(WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY, actor(), &[list]);
        let item = ShoppingListItem::new("A", 1)
            .in_list(list)
            .for_customer(customer(), Some(actor()));

        let result = f.use_case.execute(item).await.unwrap();

        assert!(result.is_persisted());
        assert_eq!(result.fk_shopping_list, Some(list));
    }

    #[tokio::test]
    async fn should_deny_existing_default_list_without_grant() {
        let f = fixture();
        f.store.seed_list(&customer(), DEFAULT_SHOPPING_LIST_NAME);
        let item = ShoppingListItem::new("A", 1).for_customer(customer(), Some(actor()));

        let result = f.use_case.execute(item).await.unwrap();

        assert!(!result.is_persisted());
        assert_eq!(result.fk_shopping_list, Some(ShoppingListId::new(1)));
    }

    #[tokio::test]
    async fn should_require_customer_when_no_list_given() {
        let f = fixture();

        let result = f.use_case.execute(ShoppingListItem::new("A", 1)).await;

        assert!(matches!(result, Err(ShoppingListError::CustomerRequired)));
    }
}

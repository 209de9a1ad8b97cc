use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CustomerReference;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{DEFAULT_SHOPPING_LIST_NAME, ShoppingList};
use crate::domain::shopping_list::repository::{ShoppingListEntityManager, ShoppingListRepository};
use crate::domain::shopping_list::use_cases::resolve_default::{
    ResolveDefaultShoppingListUseCase, ResolvedShoppingList,
};

pub struct ResolveDefaultShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub entity_manager: Arc<dyn ShoppingListEntityManager>,
    pub default_name: String,
    pub logger: Arc<dyn Logger>,
}

impl ResolveDefaultShoppingListUseCaseImpl {
    pub fn new(
        repository: Arc<dyn ShoppingListRepository>,
        entity_manager: Arc<dyn ShoppingListEntityManager>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            repository,
            entity_manager,
            default_name: DEFAULT_SHOPPING_LIST_NAME.to_string(),
            logger,
        }
    }

    async fn find_default(
        &self,
        customer_reference: &CustomerReference,
    ) -> Result<Option<ShoppingList>, RepositoryError> {
        self.repository
            .find_customer_shopping_list_by_name(customer_reference, &self.default_name)
            .await
    }
}

#[async_trait]
impl ResolveDefaultShoppingListUseCase for ResolveDefaultShoppingListUseCaseImpl {
    async fn execute(
        &self,
        customer_reference: &CustomerReference,
    ) -> Result<ResolvedShoppingList, ShoppingListError> {
        if let Some(existing) = self.find_default(customer_reference).await? {
            return Ok(ResolvedShoppingList::Existing(existing));
        }

        let candidate = ShoppingList::new(customer_reference.clone(), self.default_name.clone());
        match self.entity_manager.create_shopping_list(&candidate).await {
            Ok(created) => {
                self.logger.info(&format!(
                    "Default shopping list created for customer {}",
                    customer_reference
                ));
                Ok(ResolvedShoppingList::Created(created))
            }
            // Another request created it between our read and our insert.
            Err(RepositoryError::Duplicated) => {
                self.logger.warn(&format!(
                    "Default shopping list for customer {} created concurrently, re-reading",
                    customer_reference
                ));
                let existing = self
                    .find_default(customer_reference)
                    .await?
                    .ok_or(RepositoryError::NotFound)?;
                Ok(ResolvedShoppingList::Concurrent(existing))
            }
            Err(other) => Err(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        InMemoryShoppingLists, MockEntityManager, MockShoppingListRepo, customer, mock_logger,
    };

    fn resolver(store: Arc<InMemoryShoppingLists>) -> ResolveDefaultShoppingListUseCaseImpl {
        ResolveDefaultShoppingListUseCaseImpl::new(store.clone(), store, mock_logger())
    }

    #[tokio::test]
    async fn should_return_existing_default_list() {
        let store = Arc::new(InMemoryShoppingLists::new());
        let id = store.seed_list(&customer(), DEFAULT_SHOPPING_LIST_NAME);

        let result = resolver(store.clone()).execute(&customer()).await.unwrap();

        assert!(!result.is_new());
        assert_eq!(result.shopping_list().id, Some(id));
        assert_eq!(store.lists().len(), 1);
    }

    #[tokio::test]
    async fn should_create_default_list_when_absent() {
        let store = Arc::new(InMemoryShoppingLists::new());
        store.seed_list(&customer(), "Weekly");

        let result = resolver(store.clone()).execute(&customer()).await.unwrap();

        assert!(result.is_created());
        let list = result.into_shopping_list();
        assert!(list.id.is_some());
        assert_eq!(list.name, DEFAULT_SHOPPING_LIST_NAME);
        assert_eq!(store.lists().len(), 2);
    }

    #[tokio::test]
    async fn should_converge_on_one_list_when_resolved_concurrently() {
        let store = Arc::new(InMemoryShoppingLists::with_racing_lookups(2));
        let resolver = resolver(store.clone());
        let reference = customer();

        let (first, second) = tokio::join!(
            resolver.execute(&reference),
            resolver.execute(&reference)
        );

        let first = first.unwrap();
        let second = second.unwrap();
        assert_eq!(first.shopping_list().id, second.shopping_list().id);
        assert!(first.is_created() ^ second.is_created());
        assert!(first.is_new() && second.is_new());
        let defaults: Vec<_> = store
            .lists()
            .into_iter()
            .filter(|l| l.name == DEFAULT_SHOPPING_LIST_NAME)
            .collect();
        assert_eq!(defaults.len(), 1);
    }

    #[tokio::test]
    async fn should_propagate_storage_fault_on_create() {
        let mut repository = MockShoppingListRepo::new();
        repository
            .expect_find_customer_shopping_list_by_name()
            .returning(|_, _| Ok(None));
        let mut entity_manager = MockEntityManager::new();
        entity_manager
            .expect_create_shopping_list()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let resolver = ResolveDefaultShoppingListUseCaseImpl::new(
            Arc::new(repository),
            Arc::new(entity_manager),
            mock_logger(),
        );

        let result = resolver.execute(&customer()).await;

        assert!(matches!(
            result,
            Err(ShoppingListError::Repository(RepositoryError::DatabaseError))
        ));
    }
}

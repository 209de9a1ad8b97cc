//! Mocks and in-memory fakes shared by the use case tests.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use tokio::sync::Barrier;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::messenger::{Message, Messenger};
use crate::domain::shared::value_objects::{
    CompanyBusinessUnitId, CompanyUserId, CustomerReference, PermissionGroupId, ShoppingListId,
    ShoppingListItemId,
};
use crate::domain::shopping_list::model::{
    ShoppingList, ShoppingListCompanyBusinessUnit, ShoppingListCompanyUser, ShoppingListItem,
    ShoppingListItemPage, ShoppingListPagination, ShoppingListPermissionGroup, ShoppingListShares,
};
use crate::domain::shopping_list::permission::PermissionEngine;
use crate::domain::shopping_list::repository::{
    ShoppingListEntityManager, ShoppingListItemTransaction, ShoppingListRepository,
};
use crate::domain::shopping_list::services::ProductCatalog;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub ShoppingListRepo {}

    #[async_trait]
    impl ShoppingListRepository for ShoppingListRepo {
        async fn find_customer_shopping_list_by_name(&self, customer_reference: &CustomerReference, name: &str) -> Result<Option<ShoppingList>, RepositoryError>;
        async fn find_shopping_list_by_id(&self, id: ShoppingListId) -> Result<Option<ShoppingList>, RepositoryError>;
        async fn find_customer_shopping_lists(&self, customer_reference: &CustomerReference) -> Result<Vec<ShoppingList>, RepositoryError>;
        async fn find_shopping_list_paginated_items(&self, id_shopping_list: ShoppingListId, pagination: ShoppingListPagination) -> Result<ShoppingListItemPage, RepositoryError>;
        async fn find_shopping_list_items_by_list_id(&self, id_shopping_list: ShoppingListId) -> Result<Vec<ShoppingListItem>, RepositoryError>;
        async fn find_shopping_list_items_by_list_ids(&self, ids: &[ShoppingListId]) -> Result<Vec<ShoppingListItem>, RepositoryError>;
        async fn find_shopping_list_items_by_ids(&self, ids: &[ShoppingListItemId]) -> Result<Vec<ShoppingListItem>, RepositoryError>;
        async fn find_shopping_list_shares(&self, id_shopping_list: ShoppingListId) -> Result<ShoppingListShares, RepositoryError>;
        async fn find_company_user_shared_shopping_list_ids(&self, id_company_user: CompanyUserId) -> Result<Vec<ShoppingListId>, RepositoryError>;
        async fn find_company_business_unit_shared_shopping_list_ids(&self, id_company_business_unit: CompanyBusinessUnitId) -> Result<Vec<ShoppingListId>, RepositoryError>;
        async fn get_shopping_list_permission_group(&self) -> Result<ShoppingListPermissionGroup, RepositoryError>;
        async fn get_shopping_list_permission_groups(&self) -> Result<Vec<ShoppingListPermissionGroup>, RepositoryError>;
    }
}

mock! {
    pub EntityManager {}

    #[async_trait]
    impl ShoppingListEntityManager for EntityManager {
        async fn create_shopping_list(&self, shopping_list: &ShoppingList) -> Result<ShoppingList, RepositoryError>;
        async fn save_shopping_list_item(&self, item: &ShoppingListItem) -> Result<ShoppingListItem, RepositoryError>;
        async fn delete_shopping_list_item(&self, id: ShoppingListItemId) -> Result<(), RepositoryError>;
        async fn begin_item_transaction(&self) -> Result<Box<dyn ShoppingListItemTransaction>, RepositoryError>;
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl ProductCatalog for Catalog {
        async fn has_product_concrete(&self, sku: &str) -> Result<bool, RepositoryError>;
        async fn find_product_concrete_id_by_sku(&self, sku: &str) -> Result<Option<i64>, RepositoryError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn customer() -> CustomerReference {
    CustomerReference::new("DE--1")
}

/// Catalog knowing a fixed set of SKUs; product ids are positions + 1.
pub struct StaticCatalog {
    skus: Vec<String>,
}

impl StaticCatalog {
    pub fn with_skus(skus: &[&str]) -> Self {
        Self {
            skus: skus.iter().map(|sku| sku.to_string()).collect(),
        }
    }
}

#[async_trait]
impl ProductCatalog for StaticCatalog {
    async fn has_product_concrete(&self, sku: &str) -> Result<bool, RepositoryError> {
        Ok(self.skus.iter().any(|known| known == sku))
    }

    async fn find_product_concrete_id_by_sku(
        &self,
        sku: &str,
    ) -> Result<Option<i64>, RepositoryError> {
        Ok(self
            .skus
            .iter()
            .position(|known| known == sku)
            .map(|index| index as i64 + 1))
    }
}

#[derive(Default)]
pub struct RecordingMessenger {
    pub successes: Mutex<Vec<Message>>,
    pub errors: Mutex<Vec<Message>>,
}

impl RecordingMessenger {
    pub fn success_values(&self) -> Vec<String> {
        self.successes
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.value.clone())
            .collect()
    }

    pub fn error_values(&self) -> Vec<String> {
        self.errors
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.value.clone())
            .collect()
    }
}

impl Messenger for RecordingMessenger {
    fn add_success_message(&self, message: Message) {
        self.successes.lock().unwrap().push(message);
    }

    fn add_error_message(&self, message: Message) {
        self.errors.lock().unwrap().push(message);
    }
}

#[derive(Default)]
pub struct InMemoryPermissions {
    grants: Mutex<HashMap<(String, CompanyUserId), BTreeSet<ShoppingListId>>>,
}

impl InMemoryPermissions {
    pub fn granted(&self, key: &str, actor: CompanyUserId) -> BTreeSet<ShoppingListId> {
        self.grants
            .lock()
            .unwrap()
            .get(&(key.to_string(), actor))
            .cloned()
            .unwrap_or_default()
    }
}

impl PermissionEngine for InMemoryPermissions {
    fn grant(&self, key: &str, actor: CompanyUserId, resource_ids: &[ShoppingListId]) {
        self.grants
            .lock()
            .unwrap()
            .entry((key.to_string(), actor))
            .or_default()
            .extend(resource_ids.iter().copied());
    }

    fn revoke(&self, key: &str, actor: CompanyUserId) {
        self.grants.lock().unwrap().remove(&(key.to_string(), actor));
    }

    fn can(&self, key: &str, actor: CompanyUserId, resource_id: ShoppingListId) -> bool {
        self.granted(key, actor).contains(&resource_id)
    }
}

#[derive(Default)]
struct StoreState {
    lists: Vec<ShoppingList>,
    items: Vec<ShoppingListItem>,
    user_shares: Vec<ShoppingListCompanyUser>,
    unit_shares: Vec<ShoppingListCompanyBusinessUnit>,
    next_list_id: i64,
    next_item_id: i64,
}

impl StoreState {
    fn next_item_id(&mut self) -> ShoppingListItemId {
        self.next_item_id += 1;
        ShoppingListItemId::new(self.next_item_id)
    }
}

/// Holds the first `parties` name lookups until all of them have read,
/// so every caller observes the same (empty) state.
struct LookupRace {
    barrier: Barrier,
    remaining: AtomicUsize,
}

/// Store behaving like the relational schema: list names are unique per
/// customer and batched item writes only land on commit.
#[derive(Default)]
pub struct InMemoryShoppingLists {
    state: Arc<Mutex<StoreState>>,
    race: Option<LookupRace>,
    failing_sku: Option<String>,
}

impl InMemoryShoppingLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_racing_lookups(parties: usize) -> Self {
        Self {
            race: Some(LookupRace {
                barrier: Barrier::new(parties),
                remaining: AtomicUsize::new(parties),
            }),
            ..Self::default()
        }
    }

    /// Item writes for this SKU fail with a database error.
    pub fn failing_on_sku(sku: &str) -> Self {
        Self {
            failing_sku: Some(sku.to_string()),
            ..Self::default()
        }
    }

    pub fn seed_list(&self, customer_reference: &CustomerReference, name: &str) -> ShoppingListId {
        let mut state = self.state.lock().unwrap();
        state.next_list_id += 1;
        let id = ShoppingListId::new(state.next_list_id);
        state.lists.push(ShoppingList::from_repository(
            id,
            customer_reference.clone(),
            name.to_string(),
            None,
            None,
            Utc::now(),
            Utc::now(),
        ));
        id
    }

    pub fn seed_item(&self, id_shopping_list: ShoppingListId, sku: &str) -> ShoppingListItemId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_item_id();
        state.items.push(ShoppingListItem::from_repository(
            id,
            id_shopping_list,
            sku.to_string(),
            1,
            None,
            Default::default(),
        ));
        id
    }

    pub fn share_with_company_user(&self, list: ShoppingListId, user: CompanyUserId) {
        self.state
            .lock()
            .unwrap()
            .user_shares
            .push(ShoppingListCompanyUser {
                id_shopping_list: list,
                id_company_user: user,
                id_permission_group: PermissionGroupId::new(1),
            });
    }

    pub fn share_with_business_unit(&self, list: ShoppingListId, unit: CompanyBusinessUnitId) {
        self.state
            .lock()
            .unwrap()
            .unit_shares
            .push(ShoppingListCompanyBusinessUnit {
                id_shopping_list: list,
                id_company_business_unit: unit,
                id_permission_group: PermissionGroupId::new(1),
            });
    }

    pub fn lists(&self) -> Vec<ShoppingList> {
        self.state.lock().unwrap().lists.clone()
    }

    pub fn items(&self) -> Vec<ShoppingListItem> {
        self.state.lock().unwrap().items.clone()
    }

    async fn join_race(&self) {
        if let Some(race) = &self.race {
            let previous = race
                .remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
            if previous.is_ok() {
                race.barrier.wait().await;
            }
        }
    }

    fn check_sku(&self, item: &ShoppingListItem) -> Result<(), RepositoryError> {
        match &self.failing_sku {
            Some(sku) if *sku == item.sku => Err(RepositoryError::DatabaseError),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ShoppingListRepository for InMemoryShoppingLists {
    async fn find_customer_shopping_list_by_name(
        &self,
        customer_reference: &CustomerReference,
        name: &str,
    ) -> Result<Option<ShoppingList>, RepositoryError> {
        let found = self
            .state
            .lock()
            .unwrap()
            .lists
            .iter()
            .find(|l| l.customer_reference == *customer_reference && l.name == name)
            .cloned();
        self.join_race().await;
        Ok(found)
    }

    async fn find_shopping_list_by_id(
        &self,
        id: ShoppingListId,
    ) -> Result<Option<ShoppingList>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .lists
            .iter()
            .find(|l| l.id == Some(id))
            .cloned())
    }

    async fn find_customer_shopping_lists(
        &self,
        customer_reference: &CustomerReference,
    ) -> Result<Vec<ShoppingList>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .lists
            .iter()
            .filter(|l| l.customer_reference == *customer_reference)
            .cloned()
            .collect())
    }

    async fn find_shopping_list_paginated_items(
        &self,
        id_shopping_list: ShoppingListId,
        pagination: ShoppingListPagination,
    ) -> Result<ShoppingListItemPage, RepositoryError> {
        let all = self
            .find_shopping_list_items_by_list_id(id_shopping_list)
            .await?;
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.items_per_page as usize)
            .collect();
        Ok(ShoppingListItemPage { items, total })
    }

    async fn find_shopping_list_items_by_list_id(
        &self,
        id_shopping_list: ShoppingListId,
    ) -> Result<Vec<ShoppingListItem>, RepositoryError> {
        self.find_shopping_list_items_by_list_ids(&[id_shopping_list])
            .await
    }

    async fn find_shopping_list_items_by_list_ids(
        &self,
        ids: &[ShoppingListId],
    ) -> Result<Vec<ShoppingListItem>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .items
            .iter()
            .filter(|i| i.fk_shopping_list.is_some_and(|fk| ids.contains(&fk)))
            .cloned()
            .collect())
    }

    async fn find_shopping_list_items_by_ids(
        &self,
        ids: &[ShoppingListItemId],
    ) -> Result<Vec<ShoppingListItem>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .items
            .iter()
            .filter(|i| i.id.is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn find_shopping_list_shares(
        &self,
        id_shopping_list: ShoppingListId,
    ) -> Result<ShoppingListShares, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(ShoppingListShares {
            company_users: state
                .user_shares
                .iter()
                .filter(|s| s.id_shopping_list == id_shopping_list)
                .cloned()
                .collect(),
            company_business_units: state
                .unit_shares
                .iter()
                .filter(|s| s.id_shopping_list == id_shopping_list)
                .cloned()
                .collect(),
        })
    }

    async fn find_company_user_shared_shopping_list_ids(
        &self,
        id_company_user: CompanyUserId,
    ) -> Result<Vec<ShoppingListId>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .user_shares
            .iter()
            .filter(|s| s.id_company_user == id_company_user)
            .map(|s| s.id_shopping_list)
            .collect())
    }

    async fn find_company_business_unit_shared_shopping_list_ids(
        &self,
        id_company_business_unit: CompanyBusinessUnitId,
    ) -> Result<Vec<ShoppingListId>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .unit_shares
            .iter()
            .filter(|s| s.id_company_business_unit == id_company_business_unit)
            .map(|s| s.id_shopping_list)
            .collect())
    }

    async fn get_shopping_list_permission_group(
        &self,
    ) -> Result<ShoppingListPermissionGroup, RepositoryError> {
        Ok(ShoppingListPermissionGroup {
            id: PermissionGroupId::new(1),
            name: "FULL_ACCESS".to_string(),
        })
    }

    async fn get_shopping_list_permission_groups(
        &self,
    ) -> Result<Vec<ShoppingListPermissionGroup>, RepositoryError> {
        Ok(vec![self.get_shopping_list_permission_group().await?])
    }
}

#[async_trait]
impl ShoppingListEntityManager for InMemoryShoppingLists {
    async fn create_shopping_list(
        &self,
        shopping_list: &ShoppingList,
    ) -> Result<ShoppingList, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let taken = state.lists.iter().any(|l| {
            l.customer_reference == shopping_list.customer_reference
                && l.name == shopping_list.name
        });
        if taken {
            return Err(RepositoryError::Duplicated);
        }

        state.next_list_id += 1;
        let created = ShoppingList::from_repository(
            ShoppingListId::new(state.next_list_id),
            shopping_list.customer_reference.clone(),
            shopping_list.name.clone(),
            None,
            None,
            Utc::now(),
            Utc::now(),
        );
        state.lists.push(created.clone());
        Ok(created)
    }

    async fn save_shopping_list_item(
        &self,
        item: &ShoppingListItem,
    ) -> Result<ShoppingListItem, RepositoryError> {
        self.check_sku(item)?;
        let mut state = self.state.lock().unwrap();
        let mut saved = item.clone();
        match saved.id {
            Some(id) => {
                state.items.retain(|i| i.id != Some(id));
            }
            None => saved.id = Some(state.next_item_id()),
        }
        state.items.push(saved.clone());
        Ok(saved)
    }

    async fn delete_shopping_list_item(
        &self,
        id: ShoppingListItemId,
    ) -> Result<(), RepositoryError> {
        self.state.lock().unwrap().items.retain(|i| i.id != Some(id));
        Ok(())
    }

    async fn begin_item_transaction(
        &self,
    ) -> Result<Box<dyn ShoppingListItemTransaction>, RepositoryError> {
        Ok(Box::new(InMemoryItemTransaction {
            state: self.state.clone(),
            failing_sku: self.failing_sku.clone(),
            pending: Vec::new(),
        }))
    }
}

pub struct InMemoryItemTransaction {
    state: Arc<Mutex<StoreState>>,
    failing_sku: Option<String>,
    pending: Vec<ShoppingListItem>,
}

#[async_trait]
impl ShoppingListItemTransaction for InMemoryItemTransaction {
    async fn save_shopping_list_item(
        &mut self,
        item: &ShoppingListItem,
    ) -> Result<ShoppingListItem, RepositoryError> {
        if self.failing_sku.as_deref() == Some(item.sku.as_str()) {
            return Err(RepositoryError::DatabaseError);
        }
        let mut saved = item.clone();
        saved.id = Some(self.state.lock().unwrap().next_item_id());
        self.pending.push(saved.clone());
        Ok(saved)
    }

    async fn commit(&mut self) -> Result<(), RepositoryError> {
        let pending = std::mem::take(&mut self.pending);
        self.state.lock().unwrap().items.extend(pending);
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), RepositoryError> {
        self.pending.clear();
        Ok(())
    }
}

/// SKUs of the given items, for order-independent assertions.
pub fn skus(items: &[ShoppingListItem]) -> HashSet<String> {
    items.iter().map(|i| i.sku.clone()).collect()
}

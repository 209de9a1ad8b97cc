use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

use business::domain::shared::value_objects::{CompanyUserId, ShoppingListId};
use business::domain::shopping_list::permission::PermissionEngine;
use tracing::debug;

type GrantKey = (String, CompanyUserId);

/// Process-wide permission engine holding one resource set per
/// (permission key, company user).
#[derive(Debug, Default)]
pub struct InMemoryPermissionEngine {
    grants: RwLock<HashMap<GrantKey, HashSet<ShoppingListId>>>,
}

impl InMemoryPermissionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resources currently granted, sorted.
    pub fn granted(&self, key: &str, actor: CompanyUserId) -> Vec<ShoppingListId> {
        let grants = self.grants.read().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<ShoppingListId> = grants
            .get(&(key.to_string(), actor))
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }
}

impl PermissionEngine for InMemoryPermissionEngine {
    fn grant(&self, key: &str, actor: CompanyUserId, resource_ids: &[ShoppingListId]) {
        let mut grants = self.grants.write().unwrap_or_else(PoisonError::into_inner);
        grants
            .entry((key.to_string(), actor))
            .or_default()
            .extend(resource_ids.iter().copied());
        debug!(key, actor = %actor, count = resource_ids.len(), "permission granted");
    }

    fn revoke(&self, key: &str, actor: CompanyUserId) {
        let mut grants = self.grants.write().unwrap_or_else(PoisonError::into_inner);
        grants.remove(&(key.to_string(), actor));
        debug!(key, actor = %actor, "permission revoked");
    }

    fn can(&self, key: &str, actor: CompanyUserId, resource_id: ShoppingListId) -> bool {
        self.grants
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(key.to_string(), actor))
            .is_some_and(|ids| ids.contains(&resource_id))
    }
}

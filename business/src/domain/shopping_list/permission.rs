use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::{CompanyUserId, ShoppingListId};

pub const READ_SHOPPING_LIST_PERMISSION_PLUGIN_KEY: &str = "ReadShoppingListPermissionPlugin";
pub const WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY: &str = "WriteShoppingListPermissionPlugin";
pub const PERMISSION_CONFIG_ID_SHOPPING_LIST_COLLECTION: &str = "id_shopping_list_collection";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionKind {
    Read,
    Write,
}

impl PermissionKind {
    pub fn plugin_key(&self) -> &'static str {
        match self {
            PermissionKind::Read => READ_SHOPPING_LIST_PERMISSION_PLUGIN_KEY,
            PermissionKind::Write => WRITE_SHOPPING_LIST_PERMISSION_PLUGIN_KEY,
        }
    }
}

/// A permission record in the generic permission-engine format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub key: String,
    #[serde(default)]
    pub configuration: BTreeMap<String, serde_json::Value>,
}

impl Permission {
    pub fn shopping_list_grant(kind: PermissionKind, ids: &BTreeSet<ShoppingListId>) -> Self {
        let ids: Vec<i64> = ids.iter().map(ShoppingListId::value).collect();
        let mut configuration = BTreeMap::new();
        configuration.insert(
            PERMISSION_CONFIG_ID_SHOPPING_LIST_COLLECTION.to_string(),
            serde_json::json!(ids),
        );

        Self {
            key: kind.plugin_key().to_string(),
            configuration,
        }
    }

    /// Shopping list ids held in the configuration; empty when the record
    /// carries none.
    pub fn shopping_list_ids(&self) -> Vec<ShoppingListId> {
        self.configuration
            .get(PERMISSION_CONFIG_ID_SHOPPING_LIST_COLLECTION)
            .and_then(|value| value.as_array())
            .map(|values| {
                values
                    .iter()
                    .filter_map(serde_json::Value::as_i64)
                    .map(ShoppingListId::new)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionCollection {
    pub permissions: Vec<Permission>,
}

impl PermissionCollection {
    pub fn add_permission(&mut self, permission: Permission) {
        self.permissions.push(permission);
    }

    pub fn find(&self, kind: PermissionKind) -> Option<&Permission> {
        self.permissions
            .iter()
            .find(|permission| permission.key == kind.plugin_key())
    }
}

/// Capability interface of the permission engine.
///
/// `grant` adds to whatever the actor already holds for the key; `revoke`
/// drops the actor's whole set for the key.
pub trait PermissionEngine: Send + Sync {
    fn grant(&self, key: &str, actor: CompanyUserId, resource_ids: &[ShoppingListId]);
    fn revoke(&self, key: &str, actor: CompanyUserId);
    fn can(&self, key: &str, actor: CompanyUserId, resource_id: ShoppingListId) -> bool;
}

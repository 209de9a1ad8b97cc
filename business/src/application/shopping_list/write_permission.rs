use std::sync::Arc;

use crate::domain::shared::value_objects::{CompanyUserId, ShoppingListId};
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::permission::{PermissionEngine, PermissionKind};
use crate::domain::shopping_list::use_cases::resolve_default::ResolvedShoppingList;

/// Answers whether a company user may read or write a list, based on the
/// grants held by the permission engine.
pub struct ShoppingListPermissionGate {
    pub permission_engine: Arc<dyn PermissionEngine>,
}

impl ShoppingListPermissionGate {
    pub fn new(permission_engine: Arc<dyn PermissionEngine>) -> Self {
        Self { permission_engine }
    }

    /// A list without id is still being created and belongs to its
    /// creator. Without an actor there is nobody to hold a company grant.
    pub fn check(
        &self,
        kind: PermissionKind,
        id_shopping_list: Option<ShoppingListId>,
        actor: Option<CompanyUserId>,
    ) -> bool {
        let Some(id_shopping_list) = id_shopping_list else {
            return true;
        };
        let Some(actor) = actor else {
            return false;
        };

        self.permission_engine
            .can(kind.plugin_key(), actor, id_shopping_list)
    }

    pub fn check_write(&self, shopping_list: &ShoppingList, actor: Option<CompanyUserId>) -> bool {
        self.check(PermissionKind::Write, shopping_list.id, actor)
    }

    /// Lists that did not exist before the resolution are writable by the requester.
    pub fn check_write_resolved(
        &self,
        resolved: &ResolvedShoppingList,
        actor: Option<CompanyUserId>,
    ) -> bool {
        resolved.is_new() || self.check_write(resolved.shopping_list(), actor)
    }

    /// Extends the owner's grants after a list was created for them.
    pub fn grant_ownership(&self, id_shopping_list: ShoppingListId, owner: CompanyUserId) {
        for kind in [PermissionKind::Read, PermissionKind::Write] {
            self.permission_engine
                .grant(kind.plugin_key(), owner, &[id_shopping_list]);
        }
    }
}

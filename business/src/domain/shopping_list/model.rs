use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::{
    CompanyBusinessUnitId, CompanyUserId, CustomerReference, PermissionGroupId, ShoppingListId,
    ShoppingListItemId,
};

use super::permission::PermissionCollection;

/// Name reserved for the list used when an operation names no list.
pub const DEFAULT_SHOPPING_LIST_NAME: &str = "Shopping List";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: Option<ShoppingListId>,
    pub customer_reference: CustomerReference,
    /// Company user the list is being handled for, when known.
    pub id_company_user: Option<CompanyUserId>,
    pub name: String,
    pub owner_first_name: Option<String>,
    pub owner_last_name: Option<String>,
    pub items: Vec<ShoppingListItem>,
    pub shared_company_users: Vec<ShoppingListCompanyUser>,
    pub shared_company_business_units: Vec<ShoppingListCompanyBusinessUnit>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ShoppingList {
    /// A list that has not been persisted yet.
    pub fn new(customer_reference: CustomerReference, name: impl Into<String>) -> Self {
        Self {
            id: None,
            customer_reference,
            id_company_user: None,
            name: name.into(),
            owner_first_name: None,
            owner_last_name: None,
            items: Vec::new(),
            shared_company_users: Vec::new(),
            shared_company_business_units: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ShoppingListId,
        customer_reference: CustomerReference,
        name: String,
        owner_first_name: Option<String>,
        owner_last_name: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            customer_reference,
            id_company_user: None,
            name,
            owner_first_name,
            owner_last_name,
            items: Vec::new(),
            shared_company_users: Vec::new(),
            shared_company_business_units: Vec::new(),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }

    /// Reference to a stored list known only by its id.
    pub fn reference(id: ShoppingListId, customer_reference: CustomerReference) -> Self {
        let mut list = Self::new(customer_reference, String::new());
        list.id = Some(id);
        list
    }

    pub fn with_company_user(mut self, id_company_user: Option<CompanyUserId>) -> Self {
        self.id_company_user = id_company_user;
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: Option<ShoppingListItemId>,
    pub fk_shopping_list: Option<ShoppingListId>,
    pub sku: String,
    pub quantity: i32,
    pub id_company_user: Option<CompanyUserId>,
    /// Customer on whose behalf the item is added; used to resolve the default list.
    pub customer_reference: Option<CustomerReference>,
    /// Filled on the read path from the product catalog.
    pub id_product: Option<i64>,
    /// Extra data contributed by plugins.
    #[serde(default)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl ShoppingListItem {
    pub fn new(sku: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: None,
            fk_shopping_list: None,
            sku: sku.into(),
            quantity,
            id_company_user: None,
            customer_reference: None,
            id_product: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ShoppingListItemId,
        fk_shopping_list: ShoppingListId,
        sku: String,
        quantity: i32,
        id_company_user: Option<CompanyUserId>,
        attributes: BTreeMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: Some(id),
            fk_shopping_list: Some(fk_shopping_list),
            sku,
            quantity,
            id_company_user,
            customer_reference: None,
            id_product: None,
            attributes,
        }
    }

    pub fn in_list(mut self, id_shopping_list: ShoppingListId) -> Self {
        self.fk_shopping_list = Some(id_shopping_list);
        self
    }

    pub fn for_customer(
        mut self,
        customer_reference: CustomerReference,
        id_company_user: Option<CompanyUserId>,
    ) -> Self {
        self.customer_reference = Some(customer_reference);
        self.id_company_user = id_company_user;
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn has_sku(&self) -> bool {
        !self.sku.trim().is_empty()
    }

    pub fn has_quantity(&self) -> bool {
        self.quantity > 0
    }
}

/// Share of a list with a single company user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListCompanyUser {
    pub id_shopping_list: ShoppingListId,
    pub id_company_user: CompanyUserId,
    pub id_permission_group: PermissionGroupId,
}

/// Share of a list with every user of a business unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListCompanyBusinessUnit {
    pub id_shopping_list: ShoppingListId,
    pub id_company_business_unit: CompanyBusinessUnitId,
    pub id_permission_group: PermissionGroupId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingListShares {
    pub company_users: Vec<ShoppingListCompanyUser>,
    pub company_business_units: Vec<ShoppingListCompanyBusinessUnit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListPermissionGroup {
    pub id: PermissionGroupId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyUser {
    pub id_company_user: CompanyUserId,
    pub id_company_business_unit: CompanyBusinessUnitId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_reference: CustomerReference,
    pub company_user: Option<CompanyUser>,
    #[serde(default)]
    pub permissions: PermissionCollection,
}

impl Customer {
    pub fn new(customer_reference: CustomerReference) -> Self {
        Self {
            customer_reference,
            company_user: None,
            permissions: PermissionCollection::default(),
        }
    }

    pub fn with_company_user(mut self, company_user: CompanyUser) -> Self {
        self.company_user = Some(company_user);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListPagination {
    pub page: u32,
    pub items_per_page: u32,
}

impl ShoppingListPagination {
    pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

    pub fn new(page: u32, items_per_page: u32) -> Self {
        Self {
            page: page.max(1),
            items_per_page: if items_per_page == 0 {
                Self::DEFAULT_ITEMS_PER_PAGE
            } else {
                items_per_page
            },
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.items_per_page)
    }
}

/// One page of a list's items, ordered by item id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingListItemPage {
    pub items: Vec<ShoppingListItem>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListOverview {
    pub shopping_list: ShoppingList,
    pub pagination: ShoppingListPagination,
    pub items: ShoppingListItemPage,
    pub shopping_lists: Vec<ShoppingList>,
}

/// Outcome of a list-level mutation. Denials are reported through
/// `is_success`, never as errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListResponse {
    pub is_success: bool,
    pub shopping_list: Option<ShoppingList>,
}

impl ShoppingListResponse {
    pub fn failed() -> Self {
        Self {
            is_success: false,
            shopping_list: None,
        }
    }

    pub fn succeeded(shopping_list: Option<ShoppingList>) -> Self {
        Self {
            is_success: true,
            shopping_list,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoppingListItemResponse {
    pub is_success: bool,
}

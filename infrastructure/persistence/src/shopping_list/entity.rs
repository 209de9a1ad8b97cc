use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::shared::value_objects::{
    CompanyBusinessUnitId, CompanyUserId, CustomerReference, PermissionGroupId, ShoppingListId,
    ShoppingListItemId,
};
use business::domain::shopping_list::model::{
    ShoppingList, ShoppingListCompanyBusinessUnit, ShoppingListCompanyUser, ShoppingListItem,
    ShoppingListPermissionGroup,
};

#[derive(Debug, FromRow)]
pub struct ShoppingListEntity {
    pub id: i64,
    pub customer_reference: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingListEntity {
    pub fn into_domain(self) -> ShoppingList {
        ShoppingList::from_repository(
            ShoppingListId::new(self.id),
            CustomerReference::new(self.customer_reference),
            self.name,
            self.first_name,
            self.last_name,
            self.created_at,
            self.updated_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct ShoppingListItemEntity {
    pub id: i64,
    pub fk_shopping_list: i64,
    pub sku: String,
    pub quantity: i32,
    pub id_company_user: Option<i64>,
    pub attributes: Json<BTreeMap<String, serde_json::Value>>,
}

impl ShoppingListItemEntity {
    pub fn into_domain(self) -> ShoppingListItem {
        ShoppingListItem::from_repository(
            ShoppingListItemId::new(self.id),
            ShoppingListId::new(self.fk_shopping_list),
            self.sku,
            self.quantity,
            self.id_company_user.map(CompanyUserId::new),
            self.attributes.0,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct ShoppingListCompanyUserEntity {
    pub fk_shopping_list: i64,
    pub fk_company_user: i64,
    pub fk_shopping_list_permission_group: i64,
}

impl ShoppingListCompanyUserEntity {
    pub fn into_domain(self) -> ShoppingListCompanyUser {
        ShoppingListCompanyUser {
            id_shopping_list: ShoppingListId::new(self.fk_shopping_list),
            id_company_user: CompanyUserId::new(self.fk_company_user),
            id_permission_group: PermissionGroupId::new(self.fk_shopping_list_permission_group),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ShoppingListCompanyBusinessUnitEntity {
    pub fk_shopping_list: i64,
    pub fk_company_business_unit: i64,
    pub fk_shopping_list_permission_group: i64,
}

impl ShoppingListCompanyBusinessUnitEntity {
    pub fn into_domain(self) -> ShoppingListCompanyBusinessUnit {
        ShoppingListCompanyBusinessUnit {
            id_shopping_list: ShoppingListId::new(self.fk_shopping_list),
            id_company_business_unit: CompanyBusinessUnitId::new(self.fk_company_business_unit),
            id_permission_group: PermissionGroupId::new(self.fk_shopping_list_permission_group),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ShoppingListPermissionGroupEntity {
    pub id: i64,
    pub name: String,
}

impl ShoppingListPermissionGroupEntity {
    pub fn into_domain(self) -> ShoppingListPermissionGroup {
        ShoppingListPermissionGroup {
            id: PermissionGroupId::new(self.id),
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_item_row_with_attributes() {
        let mut attributes = BTreeMap::new();
        attributes.insert("note".to_string(), serde_json::json!("gift"));
        let entity = ShoppingListItemEntity {
            id: 4,
            fk_shopping_list: 2,
            sku: "123_456".to_string(),
            quantity: 3,
            id_company_user: Some(9),
            attributes: Json(attributes),
        };

        let item = entity.into_domain();

        assert_eq!(item.id, Some(ShoppingListItemId::new(4)));
        assert_eq!(item.fk_shopping_list, Some(ShoppingListId::new(2)));
        assert_eq!(item.id_company_user, Some(CompanyUserId::new(9)));
        assert_eq!(item.attributes["note"], "gift");
        assert!(item.customer_reference.is_none());
    }

    #[test]
    fn should_convert_list_row_with_owner_names() {
        let entity = ShoppingListEntity {
            id: 1,
            customer_reference: "DE--1".to_string(),
            name: "Shopping List".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let list = entity.into_domain();

        assert_eq!(list.id, Some(ShoppingListId::new(1)));
        assert_eq!(list.customer_reference.as_str(), "DE--1");
        assert_eq!(list.owner_first_name.as_deref(), Some("Ada"));
    }
}

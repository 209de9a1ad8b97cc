use serde::{Deserialize, Serialize};

/// Represents the customer reference owning shopping lists.
/// Lists are unique by name within one customer reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerReference(String);

impl CustomerReference {
    /// Creates a new CustomerReference from any type that can be converted into a String.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty or whitespace-only references identify no customer.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for CustomerReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CustomerReference {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CustomerReference {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// Store-assigned identifier of a shopping list.
    ShoppingListId
);
numeric_id!(
    /// Store-assigned identifier of a shopping list item.
    ShoppingListItemId
);
numeric_id!(
    /// B2B company user acting on behalf of a customer.
    CompanyUserId
);
numeric_id!(CompanyBusinessUnitId);
numeric_id!(PermissionGroupId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_customer_reference_from_str() {
        let reference = CustomerReference::new("DE--1");
        assert_eq!(reference.as_str(), "DE--1");
    }

    #[test]
    fn should_detect_blank_customer_reference() {
        assert!(CustomerReference::new("").is_blank());
        assert!(CustomerReference::new("  \t").is_blank());
        assert!(!CustomerReference::new("DE--1").is_blank());
    }

    #[test]
    fn should_display_customer_reference() {
        let reference = CustomerReference::new("DE--7");
        assert_eq!(format!("{}", reference), "DE--7");
    }

    #[test]
    fn should_compare_customer_references_for_equality() {
        let a = CustomerReference::new("same");
        let b: CustomerReference = "same".into();
        let c: CustomerReference = "other".to_string().into();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn should_expose_numeric_id_value() {
        let id = ShoppingListId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn should_serialize_ids_transparently() {
        let json = serde_json::to_string(&CompanyUserId::from(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn should_order_ids_numerically() {
        assert!(ShoppingListItemId::new(1) < ShoppingListItemId::new(2));
    }
}

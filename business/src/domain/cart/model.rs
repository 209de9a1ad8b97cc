use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::messenger::Message;
use crate::domain::shopping_list::model::ShoppingListItem;

/// Cart line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub sku: String,
    pub quantity: i32,
    /// Data added by item mapper plugins (options, notes, ...).
    #[serde(default)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl CartItem {
    pub fn new(sku: impl Into<String>, quantity: i32) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            attributes: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub items: Vec<CartItem>,
    pub bundle_items: Vec<CartItem>,
}

impl Quote {
    /// SKUs present in the cart, standalone and bundle items alike.
    pub fn sku_index(&self) -> HashSet<&str> {
        self.items
            .iter()
            .chain(self.bundle_items.iter())
            .map(|item| item.sku.as_str())
            .collect()
    }
}

/// Change-set submitted to the cart in one go.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartChange {
    pub quote: Quote,
    pub items: Vec<CartItem>,
}

/// Cart state after a submission, plus the validation messages the cart
/// produced while applying it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartChangeOutcome {
    pub quote: Quote,
    pub error_messages: Vec<Message>,
}

/// Request to move one shopping list item into the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCartRequest {
    pub sku: String,
    pub quantity: i32,
    pub shopping_list_item: ShoppingListItem,
}

impl AddToCartRequest {
    pub fn from_item(item: ShoppingListItem) -> Self {
        Self {
            sku: item.sku.clone(),
            quantity: item.quantity,
            shopping_list_item: item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_index_regular_and_bundle_skus() {
        let quote = Quote {
            items: vec![CartItem::new("A", 1)],
            bundle_items: vec![CartItem::new("B", 2)],
        };

        let index = quote.sku_index();

        assert!(index.contains("A"));
        assert!(index.contains("B"));
        assert!(!index.contains("C"));
    }

    #[test]
    fn should_take_sku_and_quantity_from_item() {
        let request = AddToCartRequest::from_item(ShoppingListItem::new("A", 4));

        assert_eq!(request.sku, "A");
        assert_eq!(request.quantity, 4);
    }
}

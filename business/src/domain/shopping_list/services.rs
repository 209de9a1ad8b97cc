use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::messenger::Message;

use super::model::ShoppingListItem;

/// Product catalog lookup port.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn has_product_concrete(&self, sku: &str) -> Result<bool, RepositoryError>;
    async fn find_product_concrete_id_by_sku(
        &self,
        sku: &str,
    ) -> Result<Option<i64>, RepositoryError>;
}

/// Result of one add-item pre-check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreAddItemCheckResponse {
    pub is_success: bool,
    pub messages: Vec<Message>,
}

impl PreAddItemCheckResponse {
    pub fn success() -> Self {
        Self {
            is_success: true,
            messages: Vec::new(),
        }
    }

    pub fn failure(messages: Vec<Message>) -> Self {
        Self {
            is_success: false,
            messages,
        }
    }
}

/// Validation hook run before an item is added. Plugins run in
/// registration order.
#[async_trait]
pub trait AddItemPreCheckPlugin: Send + Sync {
    async fn check(&self, item: &ShoppingListItem) -> PreAddItemCheckResponse;
}

/// Read-path enrichment of items.
pub trait ShoppingListItemExpanderPlugin: Send + Sync {
    fn expand_item(&self, item: ShoppingListItem) -> ShoppingListItem;
}

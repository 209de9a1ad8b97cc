use async_trait::async_trait;

use crate::domain::shopping_list::model::ShoppingListItem;

use super::errors::CartError;
use super::model::{CartChange, CartChangeOutcome, CartItem, Quote};

/// Cart / quote service port.
#[async_trait]
pub trait CartService: Send + Sync {
    async fn get_quote(&self) -> Result<Quote, CartError>;
    /// Applies the change-set, silently skipping items the cart rejects.
    async fn add_valid_items(&self, change: CartChange) -> Result<CartChangeOutcome, CartError>;
}

/// Enriches the cart line built for a shopping list item. Plugins run in
/// registration order, each receiving the previous one's output.
pub trait ShoppingListItemToItemMapperPlugin: Send + Sync {
    fn map(&self, shopping_list_item: &ShoppingListItem, item: CartItem) -> CartItem;
}

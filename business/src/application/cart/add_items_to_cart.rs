use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{AddToCartRequest, CartChange, CartItem};
use crate::domain::cart::services::{CartService, ShoppingListItemToItemMapperPlugin};
use crate::domain::cart::use_cases::add_items_to_cart::AddItemCollectionToCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::messenger::Messenger;

pub struct AddItemCollectionToCartUseCaseImpl {
    pub cart_service: Arc<dyn CartService>,
    pub mapper_plugins: Vec<Arc<dyn ShoppingListItemToItemMapperPlugin>>,
    pub messenger: Arc<dyn Messenger>,
    pub logger: Arc<dyn Logger>,
}

impl AddItemCollectionToCartUseCaseImpl {
    fn map_item(&self, request: &AddToCartRequest) -> CartItem {
        let item = CartItem::new(request.sku.clone(), request.quantity);
        self.mapper_plugins.iter().fold(item, |item, plugin| {
            plugin.map(&request.shopping_list_item, item)
        })
    }
}

#[async_trait]
impl AddItemCollectionToCartUseCase for AddItemCollectionToCartUseCaseImpl {
    async fn execute(
        &self,
        requests: Vec<AddToCartRequest>,
    ) -> Result<Vec<AddToCartRequest>, CartError> {
        let quote = self.cart_service.get_quote().await?;
        let change = CartChange {
            quote,
            items: requests.iter().map(|request| self.map_item(request)).collect(),
        };

        let outcome = self.cart_service.add_valid_items(change).await?;
        for message in outcome.error_messages {
            self.messenger.add_error_message(message);
        }

        let in_cart = outcome.quote.sku_index();
        let unresolved: Vec<AddToCartRequest> = requests
            .into_iter()
            .filter(|request| !in_cart.contains(request.sku.as_str()))
            .collect();

        if !unresolved.is_empty() {
            self.logger.info(&format!(
                "{} shopping list items did not reach the cart",
                unresolved.len()
            ));
        }

        Ok(unresolved)
    }
}

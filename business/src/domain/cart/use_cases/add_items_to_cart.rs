use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::AddToCartRequest;

/// Moves shopping list items into the cart and returns the requests whose
/// SKU did not end up in it.
#[async_trait]
pub trait AddItemCollectionToCartUseCase: Send + Sync {
    async fn execute(
        &self,
        requests: Vec<AddToCartRequest>,
    ) -> Result<Vec<AddToCartRequest>, CartError>;
}

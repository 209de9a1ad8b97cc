use async_trait::async_trait;

use crate::domain::shared::value_objects::CustomerReference;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedShoppingList {
    Existing(ShoppingList),
    /// Created by this call on behalf of the requester.
    Created(ShoppingList),
    /// Created by a concurrent request for the same customer.
    Concurrent(ShoppingList),
}

impl ResolvedShoppingList {
    pub fn is_created(&self) -> bool {
        matches!(self, ResolvedShoppingList::Created(_))
    }

    /// True when the list did not exist before the requester asked for it.
    pub fn is_new(&self) -> bool {
        !matches!(self, ResolvedShoppingList::Existing(_))
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        match self {
            ResolvedShoppingList::Existing(list)
            | ResolvedShoppingList::Created(list)
            | ResolvedShoppingList::Concurrent(list) => list,
        }
    }

    pub fn into_shopping_list(self) -> ShoppingList {
        match self {
            ResolvedShoppingList::Existing(list)
            | ResolvedShoppingList::Created(list)
            | ResolvedShoppingList::Concurrent(list) => list,
        }
    }
}

#[async_trait]
pub trait ResolveDefaultShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        customer_reference: &CustomerReference,
    ) -> Result<ResolvedShoppingList, ShoppingListError>;
}

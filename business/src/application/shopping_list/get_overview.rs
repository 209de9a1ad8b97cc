use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{
    ShoppingList, ShoppingListItem, ShoppingListItemPage, ShoppingListOverview,
};
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::services::{ProductCatalog, ShoppingListItemExpanderPlugin};
use crate::domain::shopping_list::use_cases::get_overview::{
    GetShoppingListOverviewParams, GetShoppingListOverviewUseCase,
};

pub struct GetShoppingListOverviewUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub expander_plugins: Vec<Arc<dyn ShoppingListItemExpanderPlugin>>,
    pub logger: Arc<dyn Logger>,
}

impl GetShoppingListOverviewUseCaseImpl {
    async fn expand_item(
        &self,
        mut item: ShoppingListItem,
    ) -> Result<ShoppingListItem, RepositoryError> {
        item.id_product = self
            .catalog
            .find_product_concrete_id_by_sku(&item.sku)
            .await?;

        Ok(self
            .expander_plugins
            .iter()
            .fold(item, |item, plugin| plugin.expand_item(item)))
    }

    async fn with_shares(&self, mut list: ShoppingList) -> Result<ShoppingList, RepositoryError> {
        if let Some(id) = list.id {
            let shares = self.repository.find_shopping_list_shares(id).await?;
            list.shared_company_users = shares.company_users;
            list.shared_company_business_units = shares.company_business_units;
        }
        Ok(list)
    }
}

#[async_trait]
impl GetShoppingListOverviewUseCase for GetShoppingListOverviewUseCaseImpl {
    async fn execute(
        &self,
        params: GetShoppingListOverviewParams,
    ) -> Result<ShoppingListOverview, ShoppingListError> {
        let shopping_lists = self
            .repository
            .find_customer_shopping_lists(&params.customer_reference)
            .await?;

        let Some(shopping_list) = self
            .repository
            .find_customer_shopping_list_by_name(&params.customer_reference, &params.name)
            .await?
        else {
            self.logger.info(&format!(
                "Shopping list '{}' of customer {} not found",
                params.name, params.customer_reference
            ));
            return Ok(ShoppingListOverview {
                shopping_list: ShoppingList::new(params.customer_reference, params.name),
                pagination: params.pagination,
                items: ShoppingListItemPage::default(),
                shopping_lists,
            });
        };

        let page = match shopping_list.id {
            Some(id) => {
                self.repository
                    .find_shopping_list_paginated_items(id, params.pagination)
                    .await?
            }
            None => ShoppingListItemPage::default(),
        };
        let mut items = Vec::with_capacity(page.items.len());
        for item in page.items {
            items.push(self.expand_item(item).await?);
        }

        Ok(ShoppingListOverview {
            shopping_list: self.with_shares(shopping_list).await?,
            pagination: params.pagination,
            items: ShoppingListItemPage {
                items,
                total: page.total,
            },
            shopping_lists,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        InMemoryShoppingLists, StaticCatalog, customer, mock_logger,
    };
    use crate::domain::shared::value_objects::CompanyUserId;
    use crate::domain::shopping_list::model::ShoppingListPagination;

    struct NoteExpander(&'static str);

    impl ShoppingListItemExpanderPlugin for NoteExpander {
        fn expand_item(&self, mut item: ShoppingListItem) -> ShoppingListItem {
            let note = item
                .attributes
                .get("note")
                .and_then(|value| value.as_str())
                .unwrap_or_default()
                .to_string();
            item.attributes.insert(
                "note".to_string(),
                serde_json::json!(format!("{}{}", note, self.0)),
            );
            item
        }
    }

    fn use_case(
        store: Arc<InMemoryShoppingLists>,
        expander_plugins: Vec<Arc<dyn ShoppingListItemExpanderPlugin>>,
    ) -> GetShoppingListOverviewUseCaseImpl {
        GetShoppingListOverviewUseCaseImpl {
            repository: store,
            catalog: Arc::new(StaticCatalog::with_skus(&["A", "B", "C"])),
            expander_plugins,
            logger: mock_logger(),
        }
    }

    fn params(name: &str, page: u32, items_per_page: u32) -> GetShoppingListOverviewParams {
        GetShoppingListOverviewParams {
            customer_reference: customer(),
            name: name.to_string(),
            pagination: ShoppingListPagination::new(page, items_per_page),
        }
    }

    #[tokio::test]
    async fn should_page_items_and_expand_them_in_order() {
        let store = Arc::new(InMemoryShoppingLists::new());
        let list = store.seed_list(&customer(), "Party");
        store.seed_item(list, "A");
        store.seed_item(list, "B");
        store.seed_item(list, "C");
        store.share_with_company_user(list, CompanyUserId::new(4));
        let plugins: Vec<Arc<dyn ShoppingListItemExpanderPlugin>> =
            vec![Arc::new(NoteExpander("x")), Arc::new(NoteExpander("y"))];

        let overview = use_case(store, plugins)
            .execute(params("Party", 2, 2))
            .await
            .unwrap();

        assert_eq!(overview.items.total, 3);
        assert_eq!(overview.items.items.len(), 1);
        let item = &overview.items.items[0];
        assert_eq!(item.sku, "C");
        assert_eq!(item.id_product, Some(3));
        assert_eq!(item.attributes["note"], serde_json::json!("xy"));
        assert_eq!(overview.shopping_list.shared_company_users.len(), 1);
        assert_eq!(overview.shopping_lists.len(), 1);
    }

    #[tokio::test]
    async fn should_echo_requested_list_when_missing() {
        let store = Arc::new(InMemoryShoppingLists::new());
        store.seed_list(&customer(), "Party");

        let overview = use_case(store, Vec::new())
            .execute(params("Office", 1, 10))
            .await
            .unwrap();

        assert_eq!(overview.shopping_list.name, "Office");
        assert!(!overview.shopping_list.is_persisted());
        assert_eq!(overview.items, ShoppingListItemPage::default());
        assert_eq!(overview.shopping_lists.len(), 1);
    }
}

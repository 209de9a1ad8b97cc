use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::messenger::Messenger;
use crate::domain::shopping_list::model::ShoppingListItem;
use crate::domain::shopping_list::services::{AddItemPreCheckPlugin, ProductCatalog};

use super::messages;

/// Decides whether an item may be added. Every rejection is reported to
/// the messenger; only catalog lookup faults are errors.
pub struct ShoppingListItemValidator {
    pub catalog: Arc<dyn ProductCatalog>,
    pub pre_check_plugins: Vec<Arc<dyn AddItemPreCheckPlugin>>,
    pub messenger: Arc<dyn Messenger>,
    pub logger: Arc<dyn Logger>,
}

impl ShoppingListItemValidator {
    pub async fn assert_item(&self, item: &ShoppingListItem) -> Result<bool, RepositoryError> {
        if !item.has_sku() || !item.has_quantity() {
            self.logger.warn(&format!(
                "Rejected shopping list item with sku '{}' and quantity {}",
                item.sku, item.quantity
            ));
            self.messenger
                .add_error_message(messages::item_add_failed(&item.sku));
            return Ok(false);
        }

        if !self.catalog.has_product_concrete(&item.sku).await? {
            self.logger
                .info(&format!("Unknown product concrete: {}", item.sku));
            self.messenger
                .add_error_message(messages::item_add_failed(&item.sku));
            return Ok(false);
        }

        Ok(self.pre_add_item_check(item).await)
    }

    /// Runs every plugin, even after a failure, so all messages surface.
    async fn pre_add_item_check(&self, item: &ShoppingListItem) -> bool {
        let mut is_valid = true;
        for plugin in &self.pre_check_plugins {
            let response = plugin.check(item).await;
            if !response.is_success {
                for message in response.messages {
                    self.messenger.add_error_message(message);
                }
                is_valid = false;
            }
        }

        is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockCatalog, RecordingMessenger, StaticCatalog, mock_logger,
    };
    use crate::domain::messenger::Message;
    use crate::domain::shopping_list::services::PreAddItemCheckResponse;
    use async_trait::async_trait;

    struct RejectingPlugin(&'static str);

    #[async_trait]
    impl AddItemPreCheckPlugin for RejectingPlugin {
        async fn check(&self, _item: &ShoppingListItem) -> PreAddItemCheckResponse {
            PreAddItemCheckResponse::failure(vec![Message::new(self.0)])
        }
    }

    struct ApprovingPlugin;

    #[async_trait]
    impl AddItemPreCheckPlugin for ApprovingPlugin {
        async fn check(&self, _item: &ShoppingListItem) -> PreAddItemCheckResponse {
            PreAddItemCheckResponse::success()
        }
    }

    fn validator(
        plugins: Vec<Arc<dyn AddItemPreCheckPlugin>>,
        messenger: Arc<RecordingMessenger>,
    ) -> ShoppingListItemValidator {
        ShoppingListItemValidator {
            catalog: Arc::new(StaticCatalog::with_skus(&["A"])),
            pre_check_plugins: plugins,
            messenger,
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_accept_known_sku_without_plugins() {
        let messenger = Arc::new(RecordingMessenger::default());
        let validator = validator(Vec::new(), messenger.clone());

        let result = validator.assert_item(&ShoppingListItem::new("A", 1)).await;

        assert!(result.unwrap());
        assert!(messenger.error_values().is_empty());
    }

    #[tokio::test]
    async fn should_reject_unknown_sku_with_failed_message() {
        let messenger = Arc::new(RecordingMessenger::default());
        let validator = validator(Vec::new(), messenger.clone());

        let result = validator.assert_item(&ShoppingListItem::new("Z", 1)).await;

        assert!(!result.unwrap());
        let errors = messenger.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].value, messages::GLOSSARY_KEY_ITEM_ADD_FAILED);
        assert_eq!(errors[0].parameters["%sku%"], "Z");
    }

    #[tokio::test]
    async fn should_reject_missing_quantity() {
        let messenger = Arc::new(RecordingMessenger::default());
        let validator = validator(Vec::new(), messenger.clone());

        let result = validator.assert_item(&ShoppingListItem::new("A", 0)).await;

        assert!(!result.unwrap());
        assert_eq!(messenger.error_values().len(), 1);
    }

    #[tokio::test]
    async fn should_run_every_plugin_and_collect_all_messages() {
        let messenger = Arc::new(RecordingMessenger::default());
        let plugins: Vec<Arc<dyn AddItemPreCheckPlugin>> = vec![
            Arc::new(RejectingPlugin("first")),
            Arc::new(ApprovingPlugin),
            Arc::new(RejectingPlugin("second")),
        ];
        let validator = validator(plugins, messenger.clone());

        let result = validator.assert_item(&ShoppingListItem::new("A", 2)).await;

        assert!(!result.unwrap());
        assert_eq!(messenger.error_values(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn should_propagate_catalog_fault() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_has_product_concrete()
            .returning(|_| Err(RepositoryError::DatabaseError));
        let validator = ShoppingListItemValidator {
            catalog: Arc::new(catalog),
            pre_check_plugins: Vec::new(),
            messenger: Arc::new(RecordingMessenger::default()),
            logger: mock_logger(),
        };

        let result = validator.assert_item(&ShoppingListItem::new("A", 1)).await;

        assert!(matches!(result, Err(RepositoryError::DatabaseError)));
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListPermissionGroup;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_permission_groups::GetShoppingListPermissionGroupsUseCase;

pub struct GetShoppingListPermissionGroupsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingListPermissionGroupsUseCase for GetShoppingListPermissionGroupsUseCaseImpl {
    async fn default_group(&self) -> Result<ShoppingListPermissionGroup, ShoppingListError> {
        Ok(self.repository.get_shopping_list_permission_group().await?)
    }

    async fn all_groups(&self) -> Result<Vec<ShoppingListPermissionGroup>, ShoppingListError> {
        let groups = self.repository.get_shopping_list_permission_groups().await?;
        self.logger
            .debug(&format!("Found {} shopping list permission groups", groups.len()));
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockShoppingListRepo, mock_logger};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::PermissionGroupId;

    fn group(id: i64, name: &str) -> ShoppingListPermissionGroup {
        ShoppingListPermissionGroup {
            id: PermissionGroupId::new(id),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_all_groups() {
        let mut repository = MockShoppingListRepo::new();
        repository
            .expect_get_shopping_list_permission_groups()
            .times(1)
            .returning(|| Ok(vec![group(1, "FULL_ACCESS"), group(2, "READ_ONLY")]));
        let use_case = GetShoppingListPermissionGroupsUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let groups = use_case.all_groups().await.unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].name, "READ_ONLY");
    }

    #[tokio::test]
    async fn should_fail_when_no_default_group_stored() {
        let mut repository = MockShoppingListRepo::new();
        repository
            .expect_get_shopping_list_permission_group()
            .returning(|| Err(RepositoryError::NotFound));
        let use_case = GetShoppingListPermissionGroupsUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case.default_group().await;

        assert!(matches!(
            result,
            Err(ShoppingListError::Repository(RepositoryError::NotFound))
        ));
    }
}

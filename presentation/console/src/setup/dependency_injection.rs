use std::sync::Arc;

use logger::TracingLogger;
use messenger::FlashMessenger;
use permission::InMemoryPermissionEngine;
use persistence::product::catalog::ProductCatalogPostgres;
use persistence::shopping_list::entity_manager::ShoppingListEntityManagerPostgres;
use persistence::shopping_list::repository::ShoppingListRepositoryPostgres;

use business::application::shopping_list::add_items::AddShoppingListItemsUseCaseImpl;
use business::application::shopping_list::clear::ClearShoppingListUseCaseImpl;
use business::application::shopping_list::expand_customer::ExpandCustomerPermissionsUseCaseImpl;
use business::application::shopping_list::find_permissions::FindCompanyUserPermissionsUseCaseImpl;
use business::application::shopping_list::get_lists::GetCustomerShoppingListsUseCaseImpl;
use business::application::shopping_list::get_overview::GetShoppingListOverviewUseCaseImpl;
use business::application::shopping_list::get_permission_groups::GetShoppingListPermissionGroupsUseCaseImpl;
use business::application::shopping_list::item_validator::ShoppingListItemValidator;
use business::application::shopping_list::remove_item::RemoveShoppingListItemUseCaseImpl;
use business::application::shopping_list::resolve_default::ResolveDefaultShoppingListUseCaseImpl;
use business::application::shopping_list::write_permission::ShoppingListPermissionGate;
use business::domain::shopping_list::use_cases::add_items::AddShoppingListItemsUseCase;
use business::domain::shopping_list::use_cases::clear::ClearShoppingListUseCase;
use business::domain::shopping_list::use_cases::expand_customer::ExpandCustomerPermissionsUseCase;
use business::domain::shopping_list::use_cases::get_lists::GetCustomerShoppingListsUseCase;
use business::domain::shopping_list::use_cases::get_overview::GetShoppingListOverviewUseCase;
use business::domain::shopping_list::use_cases::get_permission_groups::GetShoppingListPermissionGroupsUseCase;
use business::domain::shopping_list::use_cases::remove_item::RemoveShoppingListItemUseCase;
use business::domain::shopping_list::use_cases::resolve_default::ResolveDefaultShoppingListUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub messenger: Arc<FlashMessenger>,
    pub expand_customer: Arc<dyn ExpandCustomerPermissionsUseCase>,
    pub resolve_default: Arc<dyn ResolveDefaultShoppingListUseCase>,
    pub get_customer_lists: Arc<dyn GetCustomerShoppingListsUseCase>,
    pub get_overview: Arc<dyn GetShoppingListOverviewUseCase>,
    pub get_permission_groups: Arc<dyn GetShoppingListPermissionGroupsUseCase>,
    pub add_items: Arc<dyn AddShoppingListItemsUseCase>,
    pub clear_list: Arc<dyn ClearShoppingListUseCase>,
    pub remove_item: Arc<dyn RemoveShoppingListItemUseCase>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger::new("shopping_list"));

        // Infrastructure adapters
        let repository = Arc::new(ShoppingListRepositoryPostgres::new(pool.clone()));
        let entity_manager = Arc::new(ShoppingListEntityManagerPostgres::new(pool.clone()));
        let catalog = Arc::new(ProductCatalogPostgres::new(pool));
        let permission_engine = Arc::new(InMemoryPermissionEngine::new());
        let messenger = Arc::new(FlashMessenger::new());

        let gate = Arc::new(ShoppingListPermissionGate::new(permission_engine.clone()));
        let validator = Arc::new(ShoppingListItemValidator {
            catalog: catalog.clone(),
            pre_check_plugins: Vec::new(),
            messenger: messenger.clone(),
            logger: logger.clone(),
        });
        let resolve_default = Arc::new(ResolveDefaultShoppingListUseCaseImpl {
            repository: repository.clone(),
            entity_manager: entity_manager.clone(),
            default_name: config.default_list_name.clone(),
            logger: logger.clone(),
        });

        // Permission use cases
        let find_permissions = Arc::new(FindCompanyUserPermissionsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let expand_customer = Arc::new(ExpandCustomerPermissionsUseCaseImpl {
            find_permissions,
            permission_engine,
            logger: logger.clone(),
        });

        // Read use cases
        let get_customer_lists = Arc::new(GetCustomerShoppingListsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_overview = Arc::new(GetShoppingListOverviewUseCaseImpl {
            repository: repository.clone(),
            catalog,
            expander_plugins: Vec::new(),
            logger: logger.clone(),
        });
        let get_permission_groups = Arc::new(GetShoppingListPermissionGroupsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });

        // Write use cases
        let add_items = Arc::new(AddShoppingListItemsUseCaseImpl {
            validator,
            resolver: resolve_default.clone(),
            gate: gate.clone(),
            entity_manager: entity_manager.clone(),
            messenger: messenger.clone(),
            logger: logger.clone(),
        });
        let clear_list = Arc::new(ClearShoppingListUseCaseImpl {
            repository: repository.clone(),
            entity_manager: entity_manager.clone(),
            gate: gate.clone(),
            logger: logger.clone(),
        });
        let remove_item = Arc::new(RemoveShoppingListItemUseCaseImpl {
            repository,
            entity_manager,
            gate,
            logger,
        });

        Self {
            messenger,
            expand_customer,
            resolve_default,
            get_customer_lists,
            get_overview,
            get_permission_groups,
            add_items,
            clear_list,
            remove_item,
        }
    }
}

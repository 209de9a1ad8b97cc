/// Contract violations and persistence faults only. Validation and
/// permission outcomes are reported on the responses instead.
#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.customer_required")]
    CustomerRequired,
    #[error("shopping_list.company_user_required")]
    CompanyUserRequired,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

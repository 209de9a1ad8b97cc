#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.unavailable")]
    Unavailable,
    #[error("cart.rejected: {0}")]
    Rejected(String),
}

pub mod db;
pub mod errors;
pub mod product {
    pub mod catalog;
}
pub mod shopping_list {
    pub mod entity;
    pub mod entity_manager;
    pub mod repository;
}

pub mod db;
pub mod store;
pub mod scan_history {
    pub mod entity;
    pub mod repository;
}
pub mod settings {
    pub mod repository;
}
pub mod shopping_list {
    pub mod entity;
    pub mod repository;
}

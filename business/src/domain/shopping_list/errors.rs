#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.not_found")]
    NotFound,
    #[error("shopping_list.item_not_found")]
    ItemNotFound,
    #[error("shopping_list.name_empty")]
    NameEmpty,
    #[error("shopping_list.invalid_price")]
    InvalidPrice,
    #[error("shopping_list.invalid_quantity")]
    InvalidQuantity,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

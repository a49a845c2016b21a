use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ShoppingList;

/// Whole-collection access to the stored shopping lists.
#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// Every stored list in insertion order; empty if nothing was ever saved.
    async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
    /// Replaces the stored collection with `lists`.
    async fn save_all(&self, lists: &[ShoppingList]) -> Result<(), RepositoryError>;
}

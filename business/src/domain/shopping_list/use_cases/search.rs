use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ListSearchMatch;

#[async_trait]
pub trait SearchShoppingListsUseCase: Send + Sync {
    async fn execute(&self, query: &str) -> Result<Vec<ListSearchMatch>, ShoppingListError>;
}

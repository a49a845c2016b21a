use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shopping_list::errors::ShoppingListError;

#[async_trait]
pub trait ExportShoppingListUseCase: Send + Sync {
    async fn execute(&self, list_id: Uuid) -> Result<String, ShoppingListError>;
}

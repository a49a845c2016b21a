use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct DuplicateShoppingListParams {
    pub list_id: Uuid,
    pub name: Option<String>,
}

#[async_trait]
pub trait DuplicateShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: DuplicateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError>;
}

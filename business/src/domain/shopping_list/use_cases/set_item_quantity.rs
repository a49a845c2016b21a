use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct SetItemQuantityParams {
    pub list_id: Uuid,
    pub item_id: Uuid,
    /// Zero or less removes the item.
    pub quantity: i64,
}

#[async_trait]
pub trait SetItemQuantityUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SetItemQuantityParams,
    ) -> Result<ShoppingList, ShoppingListError>;
}

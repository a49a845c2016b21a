use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{PriceItemPatch, ShoppingList};

pub struct UpdateItemParams {
    pub list_id: Uuid,
    pub item_id: Uuid,
    pub patch: PriceItemPatch,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<ShoppingList, ShoppingListError>;
}

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct AddItemParams {
    pub list_id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: u32,
    pub image_path: Option<String>,
    pub raw_text: Option<String>,
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<ShoppingList, ShoppingListError>;
}

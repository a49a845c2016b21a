use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::shopping_list::get_by_id::find_list;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::export::to_delimited_text;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::export::ExportShoppingListUseCase;

pub struct ExportShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExportShoppingListUseCase for ExportShoppingListUseCaseImpl {
    async fn execute(&self, list_id: Uuid) -> Result<String, ShoppingListError> {
        self.logger
            .info(&format!("Exporting shopping list: {}", list_id));

        let list = find_list(self.repository.as_ref(), list_id).await?;
        Ok(to_delimited_text(&list))
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_all::GetAllShoppingListsUseCase;

pub struct GetAllShoppingListsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllShoppingListsUseCase for GetAllShoppingListsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ShoppingList>, ShoppingListError> {
        self.logger.debug("Fetching all shopping lists");

        let lists = self.repository.get_all().await?;
        Ok(lists)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::shopping_list::mutation::ListMutator;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::use_cases::clear::ClearShoppingListUseCase;

pub struct ClearShoppingListUseCaseImpl {
    pub mutator: Arc<ListMutator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearShoppingListUseCase for ClearShoppingListUseCaseImpl {
    async fn execute(&self, list_id: Uuid) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Clearing shopping list: {}", list_id));

        let list = self
            .mutator
            .mutate(list_id, |list| {
                list.clear();
                Ok(())
            })
            .await?;

        self.logger
            .info(&format!("Shopping list cleared: {}", list_id));
        Ok(list)
    }
}

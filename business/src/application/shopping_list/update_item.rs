use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shopping_list::mutation::ListMutator;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::use_cases::update_item::{UpdateItemParams, UpdateItemUseCase};

pub struct UpdateItemUseCaseImpl {
    pub mutator: Arc<ListMutator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!(
            "Updating item {} in shopping list {}",
            params.item_id, params.list_id
        ));

        let item_id = params.item_id;
        let patch = params.patch;
        let list = self
            .mutator
            .mutate(params.list_id, move |list| list.update_item(item_id, patch))
            .await?;

        self.logger.info(&format!("Item updated: {}", item_id));
        Ok(list)
    }
}

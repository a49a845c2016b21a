use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shopping_list::mutation::ListMutator;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::use_cases::duplicate::{
    DuplicateShoppingListParams, DuplicateShoppingListUseCase,
};

pub struct DuplicateShoppingListUseCaseImpl {
    pub mutator: Arc<ListMutator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DuplicateShoppingListUseCase for DuplicateShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: DuplicateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Duplicating shopping list: {}", params.list_id));

        let list_id = params.list_id;
        let name = params.name;
        let copy = self
            .mutator
            .transact(move |lists| {
                let source = lists
                    .iter()
                    .find(|list| list.id == list_id)
                    .ok_or(ShoppingListError::NotFound)?;
                let copy = source.duplicate(name);
                lists.push(copy.clone());
                Ok(copy)
            })
            .await?;

        self.logger.info(&format!(
            "Shopping list {} duplicated as {}",
            list_id, copy.id
        ));
        Ok(copy)
    }
}

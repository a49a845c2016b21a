use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shopping_list::mutation::ListMutator;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::use_cases::set_item_quantity::{
    SetItemQuantityParams, SetItemQuantityUseCase,
};

pub struct SetItemQuantityUseCaseImpl {
    pub mutator: Arc<ListMutator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetItemQuantityUseCase for SetItemQuantityUseCaseImpl {
    async fn execute(
        &self,
        params: SetItemQuantityParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!(
            "Setting quantity of item {} to {}",
            params.item_id, params.quantity
        ));

        let (item_id, quantity) = (params.item_id, params.quantity);
        self.mutator
            .mutate(params.list_id, move |list| {
                list.set_item_quantity(item_id, quantity)
            })
            .await
    }
}

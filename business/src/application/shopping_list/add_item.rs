use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shopping_list::mutation::ListMutator;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{NewPriceItemProps, PriceItem, ShoppingList};
use crate::domain::shopping_list::use_cases::add_item::{AddItemParams, AddItemUseCase};

pub struct AddItemUseCaseImpl {
    pub mutator: Arc<ListMutator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!(
            "Adding item '{}' to shopping list {}",
            params.name, params.list_id
        ));

        let item = PriceItem::new(NewPriceItemProps {
            name: params.name,
            price: params.price,
            quantity: params.quantity,
            image_path: params.image_path,
            raw_text: params.raw_text,
        })?;
        let item_id = item.id;

        let list = self
            .mutator
            .mutate(params.list_id, move |list| {
                list.add_item(item);
                Ok(())
            })
            .await?;

        self.logger.info(&format!(
            "Item {} added, list {} total is now {}",
            item_id, list.id, list.total
        ));
        Ok(list)
    }
}

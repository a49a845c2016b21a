use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shopping_list::mutation::ListMutator;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};

pub struct RemoveItemUseCaseImpl {
    pub mutator: Arc<ListMutator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemUseCase for RemoveItemUseCaseImpl {
    async fn execute(&self, params: RemoveItemParams) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!(
            "Removing item {} from shopping list {}",
            params.item_id, params.list_id
        ));

        let item_id = params.item_id;
        let logger = self.logger.clone();
        self.mutator
            .mutate(params.list_id, move |list| {
                if !list.remove_item(item_id) {
                    logger.debug(&format!("Item {} already absent", item_id));
                }
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shopping_list::model::{NewPriceItemProps, PriceItem};
    use crate::test_support::{MockShoppingListRepo, mock_logger};
    use bigdecimal::BigDecimal;
    use std::str::FromStr;
    use uuid::Uuid;

    fn stored_list() -> ShoppingList {
        let mut list = ShoppingList::new("Courses".to_string());
        list.add_item(
            PriceItem::new(NewPriceItemProps {
                name: "Pain".to_string(),
                price: BigDecimal::from_str("1.20").unwrap(),
                quantity: 2,
                image_path: None,
                raw_text: None,
            })
            .unwrap(),
        );
        list
    }

    fn use_case_for(list: ShoppingList) -> RemoveItemUseCaseImpl {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_get_all()
            .returning(move || Ok(vec![list.clone()]));
        mock_repo.expect_save_all().returning(|_| Ok(()));

        RemoveItemUseCaseImpl {
            mutator: Arc::new(ListMutator::new(Arc::new(mock_repo))),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_remove_item_and_zero_total() {
        let list = stored_list();
        let (list_id, item_id) = (list.id, list.items[0].id);

        let updated = use_case_for(list)
            .execute(RemoveItemParams { list_id, item_id })
            .await
            .unwrap();

        assert!(updated.items.is_empty());
        assert_eq!(updated.total, BigDecimal::from(0));
    }

    #[tokio::test]
    async fn should_leave_list_unchanged_when_item_absent() {
        let list = stored_list();
        let list_id = list.id;
        let (items, total) = (list.items.clone(), list.total.clone());

        let updated = use_case_for(list)
            .execute(RemoveItemParams {
                list_id,
                item_id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert_eq!(updated.items, items);
        assert_eq!(updated.total, total);
    }

    #[tokio::test]
    async fn should_return_not_found_when_list_unknown() {
        let list = stored_list();
        let item_id = list.items[0].id;

        let result = use_case_for(list)
            .execute(RemoveItemParams {
                list_id: Uuid::new_v4(),
                item_id,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NotFound));
    }
}

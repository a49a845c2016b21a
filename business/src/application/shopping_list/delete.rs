use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::shopping_list::mutation::ListMutator;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::use_cases::delete::DeleteShoppingListUseCase;

pub struct DeleteShoppingListUseCaseImpl {
    pub mutator: Arc<ListMutator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShoppingListUseCase for DeleteShoppingListUseCaseImpl {
    async fn execute(&self, list_id: Uuid) -> Result<(), ShoppingListError> {
        self.logger
            .info(&format!("Deleting shopping list: {}", list_id));

        self.mutator
            .transact(move |lists| {
                let index = lists
                    .iter()
                    .position(|list| list.id == list_id)
                    .ok_or(ShoppingListError::NotFound)?;
                lists.remove(index);
                Ok(())
            })
            .await?;

        self.logger
            .info(&format!("Shopping list deleted: {}", list_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shopping_list::model::ShoppingList;
    use crate::test_support::{MockShoppingListRepo, mock_logger};

    #[tokio::test]
    async fn should_delete_existing_list() {
        let kept = ShoppingList::new("Gardée".to_string());
        let removed = ShoppingList::new("Supprimée".to_string());
        let kept_id = kept.id;
        let removed_id = removed.id;
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_get_all()
            .returning(move || Ok(vec![kept.clone(), removed.clone()]));
        mock_repo
            .expect_save_all()
            .withf(move |lists| lists.len() == 1 && lists[0].id == kept_id)
            .returning(|_| Ok(()));

        let use_case = DeleteShoppingListUseCaseImpl {
            mutator: Arc::new(ListMutator::new(Arc::new(mock_repo))),
            logger: mock_logger(),
        };

        assert!(use_case.execute(removed_id).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_unknown_list() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));
        mock_repo.expect_save_all().never();

        let use_case = DeleteShoppingListUseCaseImpl {
            mutator: Arc::new(ListMutator::new(Arc::new(mock_repo))),
            logger: mock_logger(),
        };

        let result = use_case.execute(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NotFound));
    }
}

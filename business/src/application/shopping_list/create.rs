use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shopping_list::mutation::ListMutator;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::use_cases::create::{
    CreateShoppingListParams, CreateShoppingListUseCase,
};

pub struct CreateShoppingListUseCaseImpl {
    pub mutator: Arc<ListMutator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateShoppingListUseCase for CreateShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: CreateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Creating shopping list: {}", params.name));

        let list = ShoppingList::new(params.name);
        let created = list.clone();
        self.mutator
            .transact(move |lists| {
                lists.push(list);
                Ok(())
            })
            .await?;

        self.logger
            .info(&format!("Shopping list created: {}", created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockShoppingListRepo, mock_logger};
    use num_traits::Zero;

    #[tokio::test]
    async fn should_append_empty_list() {
        let existing = ShoppingList::new("Liste 1".to_string());
        let existing_id = existing.id;
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_get_all()
            .returning(move || Ok(vec![existing.clone()]));
        mock_repo
            .expect_save_all()
            .withf(move |lists| lists.len() == 2 && lists[0].id == existing_id)
            .returning(|_| Ok(()));

        let use_case = CreateShoppingListUseCaseImpl {
            mutator: Arc::new(ListMutator::new(Arc::new(mock_repo))),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateShoppingListParams {
                name: "Liste 2".to_string(),
            })
            .await;

        assert!(result.is_ok());
        let list = result.unwrap();
        assert_eq!(list.name, "Liste 2");
        assert!(list.items.is_empty());
        assert!(list.total.is_zero());
    }

    #[tokio::test]
    async fn should_accept_empty_name() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));
        mock_repo.expect_save_all().returning(|_| Ok(()));

        let use_case = CreateShoppingListUseCaseImpl {
            mutator: Arc::new(ListMutator::new(Arc::new(mock_repo))),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateShoppingListParams {
                name: String::new(),
            })
            .await;

        assert_eq!(result.unwrap().name, "");
    }

    #[tokio::test]
    async fn should_return_error_when_storage_rejects_write() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));
        mock_repo
            .expect_save_all()
            .returning(|_| Err(RepositoryError::Serialization));

        let use_case = CreateShoppingListUseCaseImpl {
            mutator: Arc::new(ListMutator::new(Arc::new(mock_repo))),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateShoppingListParams {
                name: "Liste".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::Serialization)
        ));
    }
}

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;

/// Serialises read-modify-write cycles over the shopping list collection.
///
/// Every writer loads the whole collection, changes it in memory and
/// persists it back while holding the same lock, so concurrent callers can
/// not overwrite each other's changes. Nothing is persisted when the change
/// fails.
pub struct ListMutator {
    repository: Arc<dyn ShoppingListRepository>,
    write_lock: Mutex<()>,
}

impl ListMutator {
    pub fn new(repository: Arc<dyn ShoppingListRepository>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// Holds off every writer until the guard is dropped.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    pub async fn transact<T, F>(&self, change: F) -> Result<T, ShoppingListError>
    where
        F: FnOnce(&mut Vec<ShoppingList>) -> Result<T, ShoppingListError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut lists = self.repository.get_all().await?;
        let value = change(&mut lists)?;
        self.repository.save_all(&lists).await?;
        Ok(value)
    }

    /// Applies `change` to the list `list_id` and returns the list as persisted.
    pub async fn mutate<F>(&self, list_id: Uuid, change: F) -> Result<ShoppingList, ShoppingListError>
    where
        F: FnOnce(&mut ShoppingList) -> Result<(), ShoppingListError> + Send,
    {
        self.transact(move |lists| {
            let list = lists
                .iter_mut()
                .find(|list| list.id == list_id)
                .ok_or(ShoppingListError::NotFound)?;
            change(list)?;
            Ok(list.clone())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::MockShoppingListRepo;

    #[tokio::test]
    async fn should_not_persist_when_list_missing() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));
        mock_repo.expect_save_all().never();

        let mutator = ListMutator::new(Arc::new(mock_repo));

        let result = mutator.mutate(Uuid::new_v4(), |_| Ok(())).await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_storage_failure() {
        let list = ShoppingList::new("Courses".to_string());
        let list_id = list.id;
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_get_all()
            .returning(move || Ok(vec![list.clone()]));
        mock_repo
            .expect_save_all()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let mutator = ListMutator::new(Arc::new(mock_repo));

        let result = mutator.mutate(list_id, |list| {
            list.clear();
            Ok(())
        })
        .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_serialise_concurrent_writers() {
        use std::sync::Mutex as StdMutex;

        let store = Arc::new(StdMutex::new(vec![ShoppingList::new("Shared".to_string())]));
        let list_id = store.lock().unwrap()[0].id;

        let mut mock_repo = MockShoppingListRepo::new();
        let read_store = store.clone();
        mock_repo
            .expect_get_all()
            .returning(move || Ok(read_store.lock().unwrap().clone()));
        let write_store = store.clone();
        mock_repo.expect_save_all().returning(move |lists| {
            *write_store.lock().unwrap() = lists.to_vec();
            Ok(())
        });

        let mutator = Arc::new(ListMutator::new(Arc::new(mock_repo)));
        let tasks: Vec<_> = (0..10)
            .map(|i| {
                let mutator = mutator.clone();
                tokio::spawn(async move {
                    mutator
                        .mutate(list_id, move |list| {
                            list.name = format!("{}-{}", list.name, i);
                            Ok(())
                        })
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let name = store.lock().unwrap()[0].name.clone();
        assert_eq!(name.matches('-').count(), 10);
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_by_id::GetShoppingListByIdUseCase;

pub struct GetShoppingListByIdUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Loads one list from the stored collection.
pub(crate) async fn find_list(
    repository: &dyn ShoppingListRepository,
    list_id: Uuid,
) -> Result<ShoppingList, ShoppingListError> {
    repository
        .get_all()
        .await?
        .into_iter()
        .find(|list| list.id == list_id)
        .ok_or(ShoppingListError::NotFound)
}

#[async_trait]
impl GetShoppingListByIdUseCase for GetShoppingListByIdUseCaseImpl {
    async fn execute(&self, list_id: Uuid) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .debug(&format!("Fetching shopping list: {}", list_id));

        find_list(self.repository.as_ref(), list_id).await
    }
}

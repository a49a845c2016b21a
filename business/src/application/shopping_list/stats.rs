use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::shopping_list::get_by_id::find_list;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ListStats;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::stats::GetListStatsUseCase;

pub struct GetListStatsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetListStatsUseCase for GetListStatsUseCaseImpl {
    async fn execute(&self, list_id: Uuid) -> Result<ListStats, ShoppingListError> {
        self.logger
            .debug(&format!("Computing stats for shopping list: {}", list_id));

        let list = find_list(self.repository.as_ref(), list_id).await?;
        Ok(list.stats())
    }
}

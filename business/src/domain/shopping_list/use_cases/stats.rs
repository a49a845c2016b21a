use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ListStats;

#[async_trait]
pub trait GetListStatsUseCase: Send + Sync {
    async fn execute(&self, list_id: Uuid) -> Result<ListStats, ShoppingListError>;
}

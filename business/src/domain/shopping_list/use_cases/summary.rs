use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ListsSummary;

#[async_trait]
pub trait GetListsSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<ListsSummary, ShoppingListError>;
}

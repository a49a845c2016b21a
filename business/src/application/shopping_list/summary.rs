use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ListsSummary;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::summary::GetListsSummaryUseCase;

pub struct GetListsSummaryUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetListsSummaryUseCase for GetListsSummaryUseCaseImpl {
    async fn execute(&self) -> Result<ListsSummary, ShoppingListError> {
        self.logger.debug("Summarizing shopping lists");

        let lists = self.repository.get_all().await?;
        Ok(ListsSummary::from_lists(&lists))
    }
}

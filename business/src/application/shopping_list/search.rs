use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ListSearchMatch;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::search::SearchShoppingListsUseCase;

pub struct SearchShoppingListsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchShoppingListsUseCase for SearchShoppingListsUseCaseImpl {
    async fn execute(&self, query: &str) -> Result<Vec<ListSearchMatch>, ShoppingListError> {
        self.logger
            .debug(&format!("Searching shopping lists for '{}'", query));

        let matches: Vec<ListSearchMatch> = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .filter_map(|list| {
                let matching_items = list.matching_items(query);
                (!matching_items.is_empty()).then_some(ListSearchMatch {
                    list,
                    matching_items,
                })
            })
            .collect();

        self.logger.debug(&format!(
            "Search for '{}' matched {} lists",
            query,
            matches.len()
        ));
        Ok(matches)
    }
}

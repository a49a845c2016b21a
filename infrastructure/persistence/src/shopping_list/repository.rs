use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::repository::ShoppingListRepository;
use business::domain::storage::Collection;

use super::entity::ShoppingListEntity;
use crate::store::KeyValueStore;

pub struct ShoppingListRepositorySqlite {
    store: KeyValueStore,
}

impl ShoppingListRepositorySqlite {
    pub fn new(store: KeyValueStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositorySqlite {
    async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError> {
        let entities: Vec<ShoppingListEntity> =
            self.store.read(Collection::ShoppingLists).await?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save_all(&self, lists: &[ShoppingList]) -> Result<(), RepositoryError> {
        let entities: Vec<ShoppingListEntity> =
            lists.iter().map(ShoppingListEntity::from_domain).collect();

        self.store.write(Collection::ShoppingLists, &entities).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use bigdecimal::BigDecimal;
    use business::domain::shopping_list::model::{NewPriceItemProps, PriceItem};
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;
    use uuid::Uuid;

    fn stored_list(name: &str) -> ShoppingList {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 10, 30, 0).unwrap();
        let item = PriceItem::from_repository(
            Uuid::new_v4(),
            "Jus d'orange".to_string(),
            BigDecimal::from_str("2.49").unwrap(),
            3,
            BigDecimal::from_str("7.47").unwrap(),
            at,
            Some("file:///photos/jus.jpg".to_string()),
            None,
        );
        ShoppingList::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            vec![item],
            BigDecimal::from_str("7.47").unwrap(),
            at,
            at,
        )
    }

    #[tokio::test]
    async fn should_read_back_saved_lists_in_order() {
        let repository = ShoppingListRepositorySqlite::new(KeyValueStore::new(test_pool().await));
        let lists = vec![stored_list("Lundi"), stored_list("Mardi")];

        repository.save_all(&lists).await.unwrap();

        assert_eq!(repository.get_all().await.unwrap(), lists);
    }

    #[tokio::test]
    async fn should_read_back_freshly_created_lists_unchanged() {
        let repository = ShoppingListRepositorySqlite::new(KeyValueStore::new(test_pool().await));
        let mut list = ShoppingList::new("Courses".to_string());
        list.add_item(
            PriceItem::new(NewPriceItemProps {
                name: "Beurre".to_string(),
                price: BigDecimal::from_str("2.35").unwrap(),
                quantity: 2,
                image_path: None,
                raw_text: Some("Beurre doux\n2,35".to_string()),
            })
            .unwrap(),
        );
        let lists = vec![list, ShoppingList::new("Marché".to_string())];

        repository.save_all(&lists).await.unwrap();

        assert_eq!(repository.get_all().await.unwrap(), lists);
    }

    #[tokio::test]
    async fn should_start_empty() {
        let repository = ShoppingListRepositorySqlite::new(KeyValueStore::new(test_pool().await));

        assert!(repository.get_all().await.unwrap().is_empty());
    }
}

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Named group of records persisted as a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    ShoppingLists,
    ScanHistory,
    Settings,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::ShoppingLists,
        Collection::ScanHistory,
        Collection::Settings,
    ];

    /// Storage key of the collection.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::ShoppingLists => "shopping_lists",
            Collection::ScanHistory => "scan_history",
            Collection::Settings => "settings",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Port for wiping whole collections from the store.
#[async_trait]
pub trait StorageMaintenance: Send + Sync {
    /// Removes the named collections. Clearing an absent collection is a no-op.
    async fn clear(&self, collections: &[Collection]) -> Result<(), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_stable_storage_keys() {
        let keys: Vec<&str> = Collection::ALL.iter().map(|c| c.key()).collect();

        assert_eq!(keys, vec!["shopping_lists", "scan_history", "settings"]);
    }
}

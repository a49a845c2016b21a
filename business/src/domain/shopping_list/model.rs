use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::ShoppingListError;
use crate::domain::clock;

/// One article of a shopping list, scanned from a price tag or typed in.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceItem {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: u32,
    /// Always `price * quantity`.
    pub total: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub image_path: Option<String>,
    pub raw_text: Option<String>,
}

pub struct NewPriceItemProps {
    pub name: String,
    pub price: BigDecimal,
    pub quantity: u32,
    pub image_path: Option<String>,
    pub raw_text: Option<String>,
}

/// Fields of an item that can be edited after creation.
#[derive(Debug, Clone, Default)]
pub struct PriceItemPatch {
    pub name: Option<String>,
    pub price: Option<BigDecimal>,
    pub quantity: Option<u32>,
}

impl PriceItem {
    pub fn new(props: NewPriceItemProps) -> Result<Self, ShoppingListError> {
        validate_name(&props.name)?;
        validate_price(&props.price)?;
        validate_quantity(props.quantity)?;

        let total = line_total(&props.price, props.quantity);
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            price: props.price,
            quantity: props.quantity,
            total,
            created_at: clock::now(),
            image_path: props.image_path,
            raw_text: props.raw_text,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: BigDecimal,
        quantity: u32,
        total: BigDecimal,
        created_at: DateTime<Utc>,
        image_path: Option<String>,
        raw_text: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            quantity,
            total,
            created_at,
            image_path,
            raw_text,
        }
    }

    fn apply(&mut self, patch: PriceItemPatch) -> Result<(), ShoppingListError> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(price) = &patch.price {
            validate_price(price)?;
        }
        if let Some(quantity) = patch.quantity {
            validate_quantity(quantity)?;
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        self.total = line_total(&self.price, self.quantity);
        Ok(())
    }

    /// Copy of the item under a fresh identifier, so lists never share item ids.
    fn duplicate(&self, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            ..self.clone()
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .raw_text
                .as_ref()
                .is_some_and(|text| text.to_lowercase().contains(needle))
    }
}

fn validate_name(name: &str) -> Result<(), ShoppingListError> {
    if name.trim().is_empty() {
        return Err(ShoppingListError::NameEmpty);
    }
    Ok(())
}

fn validate_price(price: &BigDecimal) -> Result<(), ShoppingListError> {
    if *price < BigDecimal::zero() {
        return Err(ShoppingListError::InvalidPrice);
    }
    Ok(())
}

fn validate_quantity(quantity: u32) -> Result<(), ShoppingListError> {
    if quantity == 0 {
        return Err(ShoppingListError::InvalidQuantity);
    }
    Ok(())
}

fn line_total(price: &BigDecimal, quantity: u32) -> BigDecimal {
    price * &BigDecimal::from(quantity)
}

/// Named, ordered collection of items with an aggregate total.
///
/// Every mutation recomputes `total` as a full fold over `items` and bumps
/// `updated_at`, which never goes below `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<PriceItem>,
    pub total: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Figures computed over a single list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListStats {
    /// Sum of quantities, not the number of item lines.
    pub total_items: u64,
    pub total_value: BigDecimal,
    pub average_price: BigDecimal,
    pub cheapest_item: Option<PriceItem>,
    pub most_expensive_item: Option<PriceItem>,
}

/// A list together with the items that matched a search query.
#[derive(Debug, Clone)]
pub struct ListSearchMatch {
    pub list: ShoppingList,
    pub matching_items: Vec<PriceItem>,
}

/// Figures computed across every stored list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListsSummary {
    pub list_count: usize,
    pub item_count: usize,
    pub total_spent: BigDecimal,
}

impl ListsSummary {
    pub fn from_lists(lists: &[ShoppingList]) -> Self {
        Self {
            list_count: lists.len(),
            item_count: lists.iter().map(|list| list.items.len()).sum(),
            total_spent: lists
                .iter()
                .fold(BigDecimal::zero(), |sum, list| sum + &list.total),
        }
    }
}

impl ShoppingList {
    /// Creates an empty list. The name is free-form and may be empty.
    pub fn new(name: String) -> Self {
        let now = clock::now();
        Self {
            id: Uuid::new_v4(),
            name,
            items: Vec::new(),
            total: BigDecimal::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        items: Vec<PriceItem>,
        total: BigDecimal,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            items,
            total,
            created_at,
            updated_at,
        }
    }

    pub fn find_item(&self, item_id: Uuid) -> Option<&PriceItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn add_item(&mut self, item: PriceItem) {
        self.items.push(item);
        self.recalculate();
    }

    pub fn update_item(
        &mut self,
        item_id: Uuid,
        patch: PriceItemPatch,
    ) -> Result<(), ShoppingListError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(ShoppingListError::ItemNotFound)?;
        item.apply(patch)?;
        self.recalculate();
        Ok(())
    }

    /// Sets the quantity of an item; zero or less removes it instead.
    pub fn set_item_quantity(
        &mut self,
        item_id: Uuid,
        quantity: i64,
    ) -> Result<(), ShoppingListError> {
        if quantity <= 0 {
            self.remove_item(item_id);
            return Ok(());
        }

        let quantity = u32::try_from(quantity).map_err(|_| ShoppingListError::InvalidQuantity)?;
        self.update_item(
            item_id,
            PriceItemPatch {
                quantity: Some(quantity),
                ..PriceItemPatch::default()
            },
        )
    }

    /// Removes an item. Returns false, leaving the list untouched, when the item is absent.
    pub fn remove_item(&mut self, item_id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        if self.items.len() == before {
            return false;
        }
        self.recalculate();
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recalculate();
    }

    /// Deep copy under a new identifier with fresh item identifiers and timestamps.
    ///
    /// A blank or missing name falls back to `"<original> (Copy)"`.
    pub fn duplicate(&self, name: Option<String>) -> Self {
        let now = clock::now();
        let name = name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("{} (Copy)", self.name));

        let mut copy = Self {
            id: Uuid::new_v4(),
            name,
            items: self.items.iter().map(|item| item.duplicate(now)).collect(),
            total: BigDecimal::zero(),
            created_at: now,
            updated_at: now,
        };
        copy.recalculate();
        copy
    }

    /// Items whose name or recognized text contains `query`, ignoring case.
    pub fn matching_items(&self, query: &str) -> Vec<PriceItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches(&needle))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> ListStats {
        let total_items: u64 = self.items.iter().map(|item| u64::from(item.quantity)).sum();
        let average_price = if total_items > 0 {
            &self.total / &BigDecimal::from(total_items)
        } else {
            BigDecimal::zero()
        };

        // Ties keep the first occurrence in list order.
        let cheapest_item = self.items.iter().fold(None::<&PriceItem>, |best, item| match best {
            Some(best) if best.price <= item.price => Some(best),
            _ => Some(item),
        });
        let most_expensive_item =
            self.items.iter().fold(None::<&PriceItem>, |best, item| match best {
                Some(best) if best.price >= item.price => Some(best),
                _ => Some(item),
            });

        ListStats {
            total_items,
            total_value: self.total.clone(),
            average_price,
            cheapest_item: cheapest_item.cloned(),
            most_expensive_item: most_expensive_item.cloned(),
        }
    }

    fn recalculate(&mut self) {
        self.total = self
            .items
            .iter()
            .fold(BigDecimal::zero(), |sum, item| sum + &item.total);
        self.updated_at = clock::now().max(self.created_at);
    }
}

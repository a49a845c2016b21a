use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::shopping_list::model::{
    ListSearchMatch, ListStats, ListsSummary, PriceItem, ShoppingList,
};

/// Decimal places used when rendering the average unit price.
const AVERAGE_PRICE_SCALE: i64 = 2;

#[derive(Debug, Clone, Object)]
pub struct CreateShoppingListRequest {
    /// List name (cannot be empty)
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct DuplicateShoppingListRequest {
    /// Name of the copy; defaults to "<original> (Copy)"
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct AddItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Unit price as a decimal string, "." or "," separator
    pub price: String,
    /// Number of units (default: 1)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
    /// Photo the item was scanned from
    #[oai(skip_serializing_if_is_none)]
    pub image_path: Option<String>,
    /// Text recognized on the photo
    #[oai(skip_serializing_if_is_none)]
    pub raw_text: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SetItemQuantityRequest {
    /// New quantity; zero or less removes the item
    pub quantity: String,
}

#[derive(Debug, Clone, Object)]
pub struct PriceItemResponse {
    pub id: String,
    pub name: String,
    /// Unit price
    pub price: String,
    pub quantity: u32,
    /// Unit price times quantity
    pub total: String,
    pub created_at: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub image_path: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub raw_text: Option<String>,
}

impl From<PriceItem> for PriceItemResponse {
    fn from(item: PriceItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            price: item.price.to_string(),
            quantity: item.quantity,
            total: item.total.to_string(),
            created_at: item.created_at,
            image_path: item.image_path,
            raw_text: item.raw_text,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingListResponse {
    pub id: String,
    pub name: String,
    pub items: Vec<PriceItemResponse>,
    /// Sum of the item totals
    pub total: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        Self {
            id: list.id.to_string(),
            name: list.name,
            items: list.items.into_iter().map(|i| i.into()).collect(),
            total: list.total.to_string(),
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ListStatsResponse {
    /// Sum of quantities
    pub total_items: u64,
    pub total_value: String,
    /// Total value divided by the number of units, rounded to cents
    pub average_price: String,
    #[oai(skip_serializing_if_is_none)]
    pub cheapest_item: Option<PriceItemResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub most_expensive_item: Option<PriceItemResponse>,
}

impl From<ListStats> for ListStatsResponse {
    fn from(stats: ListStats) -> Self {
        Self {
            total_items: stats.total_items,
            total_value: stats.total_value.to_string(),
            average_price: stats.average_price.round(AVERAGE_PRICE_SCALE).to_string(),
            cheapest_item: stats.cheapest_item.map(|i| i.into()),
            most_expensive_item: stats.most_expensive_item.map(|i| i.into()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SearchMatchResponse {
    pub list: ShoppingListResponse,
    pub matching_items: Vec<PriceItemResponse>,
}

impl From<ListSearchMatch> for SearchMatchResponse {
    fn from(found: ListSearchMatch) -> Self {
        Self {
            list: found.list.into(),
            matching_items: found.matching_items.into_iter().map(|i| i.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ListsSummaryResponse {
    pub list_count: u64,
    /// Number of item lines across every list
    pub item_count: u64,
    /// Sum of every list total
    pub total_spent: String,
}

impl From<ListsSummary> for ListsSummaryResponse {
    fn from(summary: ListsSummary) -> Self {
        Self {
            list_count: summary.list_count as u64,
            item_count: summary.item_count as u64,
            total_spent: summary.total_spent.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use business::domain::shopping_list::model::NewPriceItemProps;
    use std::str::FromStr;

    fn item(name: &str, price: &str, quantity: u32) -> PriceItem {
        PriceItem::new(NewPriceItemProps {
            name: name.to_string(),
            price: BigDecimal::from_str(price).unwrap(),
            quantity,
            image_path: None,
            raw_text: None,
        })
        .unwrap()
    }

    #[test]
    fn should_render_amounts_as_decimal_strings() {
        let mut list = ShoppingList::new("Courses".to_string());
        list.add_item(item("Pain", "1.20", 3));

        let response = ShoppingListResponse::from(list);

        assert_eq!(response.total, "3.60");
        assert_eq!(response.items[0].price, "1.20");
        assert_eq!(response.items[0].total, "3.60");
    }

    #[test]
    fn should_round_average_price_to_cents() {
        let mut list = ShoppingList::new("Courses".to_string());
        list.add_item(item("Pain", "1.00", 1));
        list.add_item(item("Lait", "1.00", 2));
        list.add_item(item("Pomme", "0.00", 1));

        let response = ListStatsResponse::from(list.stats());

        assert_eq!(response.total_items, 4);
        assert_eq!(response.average_price, "0.75");
    }
}

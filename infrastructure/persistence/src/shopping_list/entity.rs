use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::shopping_list::model::{PriceItem, ShoppingList};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceItemEntity {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: u32,
    pub total: BigDecimal,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,
}

impl PriceItemEntity {
    pub fn from_domain(item: &PriceItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price.clone(),
            quantity: item.quantity,
            total: item.total.clone(),
            timestamp: item.created_at,
            image_uri: item.image_path.clone(),
            ocr_text: item.raw_text.clone(),
        }
    }

    pub fn into_domain(self) -> PriceItem {
        PriceItem::from_repository(
            self.id,
            self.name,
            self.price,
            self.quantity,
            self.total,
            self.timestamp,
            self.image_uri,
            self.ocr_text,
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListEntity {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub items: Vec<PriceItemEntity>,
    pub total: BigDecimal,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl ShoppingListEntity {
    pub fn from_domain(list: &ShoppingList) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            items: list.items.iter().map(PriceItemEntity::from_domain).collect(),
            total: list.total.clone(),
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }

    pub fn into_domain(self) -> ShoppingList {
        ShoppingList::from_repository(
            self.id,
            self.name,
            self.items.into_iter().map(|e| e.into_domain()).collect(),
            self.total,
            self.created_at,
            self.updated_at,
        )
    }
}

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::scan::model::{RecognitionResult, ScanRecord};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionEntity {
    pub text: String,
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<BigDecimal>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecordEntity {
    pub id: Uuid,
    pub image_uri: String,
    pub recognition: RecognitionEntity,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<Uuid>,
}

impl ScanRecordEntity {
    pub fn from_domain(record: &ScanRecord) -> Self {
        let recognition = &record.recognition;
        Self {
            id: record.id,
            image_uri: record.image_path.clone(),
            recognition: RecognitionEntity {
                text: recognition.text.clone(),
                confidence: recognition.confidence,
                name: recognition.name.clone(),
                price: recognition.price.clone(),
            },
            timestamp: record.created_at,
            list_id: record.list_id,
        }
    }

    pub fn into_domain(self) -> ScanRecord {
        ScanRecord::from_repository(
            self.id,
            self.image_uri,
            RecognitionResult {
                text: self.recognition.text,
                confidence: self.recognition.confidence,
                name: self.recognition.name,
                price: self.recognition.price,
            },
            self.timestamp,
            self.list_id,
        )
    }
}

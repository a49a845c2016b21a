use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::scan::model::ScanRecord;

#[derive(Debug, Clone, Object)]
pub struct CaptureScanRequest {
    /// Location of the photo to recognize, readable by the server
    pub image_path: String,
    /// List the scan is meant for, if any
    #[oai(skip_serializing_if_is_none)]
    pub list_id: Option<String>,
}

/// A recognition to review before turning it into an item.
#[derive(Debug, Clone, Object)]
pub struct ScanRecordResponse {
    pub id: String,
    pub image_path: String,
    /// Full recognized text, one line per visual line
    pub text: String,
    /// Mean word confidence between 0 and 1
    pub confidence: f32,
    /// Guessed product name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Guessed unit price
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    pub created_at: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub list_id: Option<String>,
}

impl From<ScanRecord> for ScanRecordResponse {
    fn from(record: ScanRecord) -> Self {
        Self {
            id: record.id.to_string(),
            image_path: record.image_path,
            text: record.recognition.text,
            confidence: record.recognition.confidence,
            name: record.recognition.name,
            price: record.recognition.price.map(|price| price.to_string()),
            created_at: record.created_at,
            list_id: record.list_id.map(|id| id.to_string()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct LanguagesResponse {
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SetLanguagesRequest {
    /// Engine language codes, e.g. "eng", "fra"
    pub languages: Vec<String>,
}

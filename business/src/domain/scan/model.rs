use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::clock;

use super::extraction::ExtractedFields;
use super::services::RawRecognition;

/// Maximum number of entries kept in the scan history.
pub const SCAN_HISTORY_LIMIT: usize = 100;

/// Recognized text of one image plus the fields guessed from it.
///
/// Advisory only: the guesses are shown to the user for review before an
/// item is created from them.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    pub text: String,
    pub confidence: f32,
    pub name: Option<String>,
    pub price: Option<BigDecimal>,
}

impl RecognitionResult {
    pub fn new(raw: RawRecognition, extracted: ExtractedFields) -> Self {
        Self {
            text: raw.text,
            confidence: raw.confidence.clamp(0.0, 1.0),
            name: extracted.name,
            price: extracted.price,
        }
    }
}

/// One capture attempt kept in the scan history.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRecord {
    pub id: Uuid,
    pub image_path: String,
    pub recognition: RecognitionResult,
    pub created_at: DateTime<Utc>,
    pub list_id: Option<Uuid>,
}

impl ScanRecord {
    pub fn new(image_path: String, recognition: RecognitionResult, list_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_path,
            recognition,
            created_at: clock::now(),
            list_id,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        image_path: String,
        recognition: RecognitionResult,
        created_at: DateTime<Utc>,
        list_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            image_path,
            recognition,
            created_at,
            list_id,
        }
    }
}

/// Prepends `record` and evicts the oldest entries past [`SCAN_HISTORY_LIMIT`].
pub fn push_record(history: &mut Vec<ScanRecord>, record: ScanRecord) {
    history.insert(0, record);
    history.truncate(SCAN_HISTORY_LIMIT);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> ScanRecord {
        ScanRecord::new(
            format!("/tmp/{text}.jpg"),
            RecognitionResult {
                text: text.to_string(),
                confidence: 0.9,
                name: None,
                price: None,
            },
            None,
        )
    }

    #[test]
    fn should_prepend_newest_record() {
        let mut history = vec![record("old")];

        push_record(&mut history, record("new"));

        assert_eq!(history[0].recognition.text, "new");
        assert_eq!(history[1].recognition.text, "old");
    }

    #[test]
    fn should_evict_oldest_records_past_limit() {
        let mut history: Vec<ScanRecord> = (0..SCAN_HISTORY_LIMIT)
            .rev()
            .map(|i| record(&i.to_string()))
            .collect();

        push_record(&mut history, record("latest"));

        assert_eq!(history.len(), SCAN_HISTORY_LIMIT);
        assert_eq!(history[0].recognition.text, "latest");
        assert_eq!(history[SCAN_HISTORY_LIMIT - 1].recognition.text, "1");
    }

    #[test]
    fn should_clamp_confidence_into_unit_range() {
        let result = RecognitionResult::new(
            RawRecognition {
                text: String::new(),
                confidence: 1.4,
            },
            ExtractedFields::default(),
        );

        assert_eq!(result.confidence, 1.0);
    }
}

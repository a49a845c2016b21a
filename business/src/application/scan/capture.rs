use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::extraction::extract_fields;
use crate::domain::scan::model::{RecognitionResult, ScanRecord, push_record};
use crate::domain::scan::repository::ScanHistoryRepository;
use crate::domain::scan::services::TextRecognizer;
use crate::domain::scan::use_cases::capture::{CaptureScanParams, CaptureScanUseCase};

pub struct CaptureScanUseCaseImpl {
    pub recognizer: Arc<dyn TextRecognizer>,
    pub repository: Arc<dyn ScanHistoryRepository>,
    pub logger: Arc<dyn Logger>,
    pub history_lock: Arc<Mutex<()>>,
}

#[async_trait]
impl CaptureScanUseCase for CaptureScanUseCaseImpl {
    async fn execute(&self, params: CaptureScanParams) -> Result<ScanRecord, ScanError> {
        self.logger
            .info(&format!("Recognizing text in image: {}", params.image_path));

        self.recognizer.initialize().await?;
        let raw = self
            .recognizer
            .recognize(&params.image_path)
            .await
            .map_err(|err| {
                self.logger.error(&format!(
                    "Recognition failed for {}: {}",
                    params.image_path, err
                ));
                err
            })?;

        let extracted = extract_fields(&raw.text);
        let record = ScanRecord::new(
            params.image_path,
            RecognitionResult::new(raw, extracted),
            params.list_id,
        );

        {
            let _guard = self.history_lock.lock().await;
            let mut history = self.repository.get_all().await?;
            push_record(&mut history, record.clone());
            self.repository.save_all(&history).await?;
        }

        self.logger.info(&format!(
            "Scan {} recorded (confidence {:.2}, price found: {})",
            record.id,
            record.recognition.confidence,
            record.recognition.price.is_some()
        ));
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scan::model::SCAN_HISTORY_LIMIT;
    use crate::domain::scan::services::RawRecognition;
    use crate::test_support::{MockRecognizer, MockScanHistoryRepo, mock_logger};
    use bigdecimal::BigDecimal;
    use std::str::FromStr;
    use uuid::Uuid;

    fn ready_recognizer(text: &'static str, confidence: f32) -> MockRecognizer {
        let mut recognizer = MockRecognizer::new();
        recognizer.expect_initialize().returning(|| Ok(()));
        recognizer.expect_recognize().returning(move |_| {
            Ok(RawRecognition {
                text: text.to_string(),
                confidence,
            })
        });
        recognizer
    }

    fn previous_record(index: usize) -> ScanRecord {
        ScanRecord::new(
            format!("/photos/{index}.jpg"),
            RecognitionResult {
                text: String::new(),
                confidence: 0.5,
                name: None,
                price: None,
            },
            None,
        )
    }

    #[tokio::test]
    async fn should_record_scan_with_extracted_fields() {
        let list_id = Uuid::new_v4();
        let mut mock_repo = MockScanHistoryRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));
        mock_repo
            .expect_save_all()
            .withf(|records| records.len() == 1)
            .returning(|_| Ok(()));

        let use_case = CaptureScanUseCaseImpl {
            recognizer: Arc::new(ready_recognizer("Camembert\n3,49 €", 0.87)),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            history_lock: Arc::new(Mutex::new(())),
        };

        let record = use_case
            .execute(CaptureScanParams {
                image_path: "/photos/camembert.jpg".to_string(),
                list_id: Some(list_id),
            })
            .await
            .unwrap();

        assert_eq!(record.image_path, "/photos/camembert.jpg");
        assert_eq!(record.list_id, Some(list_id));
        assert_eq!(record.recognition.name.as_deref(), Some("Camembert"));
        assert_eq!(
            record.recognition.price,
            Some(BigDecimal::from_str("3.49").unwrap())
        );
        assert!((record.recognition.confidence - 0.87).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn should_keep_history_bounded_and_newest_first() {
        let full_history: Vec<ScanRecord> = (0..SCAN_HISTORY_LIMIT).map(previous_record).collect();
        let oldest_kept = full_history[SCAN_HISTORY_LIMIT - 2].id;
        let mut mock_repo = MockScanHistoryRepo::new();
        mock_repo
            .expect_get_all()
            .returning(move || Ok(full_history.clone()));
        mock_repo
            .expect_save_all()
            .withf(move |records| {
                records.len() == SCAN_HISTORY_LIMIT
                    && records[0].image_path == "/photos/new.jpg"
                    && records[SCAN_HISTORY_LIMIT - 1].id == oldest_kept
            })
            .returning(|_| Ok(()));

        let use_case = CaptureScanUseCaseImpl {
            recognizer: Arc::new(ready_recognizer("", 0.0)),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            history_lock: Arc::new(Mutex::new(())),
        };

        use_case
            .execute(CaptureScanParams {
                image_path: "/photos/new.jpg".to_string(),
                list_id: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_not_touch_history_when_recognition_fails() {
        let mut recognizer = MockRecognizer::new();
        recognizer.expect_initialize().returning(|| Ok(()));
        recognizer
            .expect_recognize()
            .returning(|_| Err(ScanError::RecognitionFailed));
        let mut mock_repo = MockScanHistoryRepo::new();
        mock_repo.expect_get_all().never();
        mock_repo.expect_save_all().never();

        let use_case = CaptureScanUseCaseImpl {
            recognizer: Arc::new(recognizer),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            history_lock: Arc::new(Mutex::new(())),
        };

        let result = use_case
            .execute(CaptureScanParams {
                image_path: "/photos/blurry.jpg".to_string(),
                list_id: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ScanError::RecognitionFailed));
    }

    #[tokio::test]
    async fn should_fail_when_recognizer_cannot_start() {
        let mut recognizer = MockRecognizer::new();
        recognizer
            .expect_initialize()
            .returning(|| Err(ScanError::RecognizerUnavailable));
        recognizer.expect_recognize().never();
        let mut mock_repo = MockScanHistoryRepo::new();
        mock_repo.expect_save_all().never();

        let use_case = CaptureScanUseCaseImpl {
            recognizer: Arc::new(recognizer),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            history_lock: Arc::new(Mutex::new(())),
        };

        let result = use_case
            .execute(CaptureScanParams {
                image_path: "/photos/any.jpg".to_string(),
                list_id: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ScanError::RecognizerUnavailable
        ));
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("scan.recognition_failed")]
    RecognitionFailed,
    #[error("scan.recognizer_unavailable")]
    RecognizerUnavailable,
    #[error("scan.invalid_language")]
    InvalidLanguage,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

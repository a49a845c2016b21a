use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::scan::errors::ScanError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ScanError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ScanError::RecognitionFailed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "RecognitionError",
                "scan.recognition_failed",
            ),
            ScanError::RecognizerUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "RecognitionError",
                "scan.recognizer_unavailable",
            ),
            ScanError::InvalidLanguage => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "scan.invalid_language",
            ),
            ScanError::Repository(err) => {
                tracing::error!("Scan history storage failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        };

        (status, ErrorResponse::json(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_distinguish_engine_outage_from_unreadable_image() {
        let (unavailable, _) = ScanError::RecognizerUnavailable.into_error_response();
        let (failed, json) = ScanError::RecognitionFailed.into_error_response();

        assert_eq!(unavailable, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(failed, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "scan.recognition_failed");
    }
}

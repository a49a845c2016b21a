use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::settings::errors::SettingsError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SettingsError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SettingsError::NotAnObject => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "settings.not_an_object",
            ),
            SettingsError::Repository(err) => {
                tracing::error!("Settings storage failure: {}", err);
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

use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::scan::use_cases::capture::{CaptureScanParams, CaptureScanUseCase};
use business::domain::scan::use_cases::get_history::GetScanHistoryUseCase;
use business::domain::scan::use_cases::languages::{
    ListLanguagesUseCase, SetLanguagesParams, SetLanguagesUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::scan::dto::{
    CaptureScanRequest, LanguagesResponse, ScanRecordResponse, SetLanguagesRequest,
};
use crate::api::tags::ApiTags;
use crate::api::validation::parse_optional_id;

pub struct ScanApi {
    capture_use_case: Arc<dyn CaptureScanUseCase>,
    get_history_use_case: Arc<dyn GetScanHistoryUseCase>,
    list_languages_use_case: Arc<dyn ListLanguagesUseCase>,
    set_languages_use_case: Arc<dyn SetLanguagesUseCase>,
}

impl ScanApi {
    pub fn new(
        capture_use_case: Arc<dyn CaptureScanUseCase>,
        get_history_use_case: Arc<dyn GetScanHistoryUseCase>,
        list_languages_use_case: Arc<dyn ListLanguagesUseCase>,
        set_languages_use_case: Arc<dyn SetLanguagesUseCase>,
    ) -> Self {
        Self {
            capture_use_case,
            get_history_use_case,
            list_languages_use_case,
            set_languages_use_case,
        }
    }
}

/// Price tag recognition API
#[OpenApi]
impl ScanApi {
    /// Recognize a price tag photo
    ///
    /// Returns the recognized text with a guessed name and unit price and
    /// records the attempt in the scan history. Nothing is added to a list.
    #[oai(path = "/scans", method = "post", tag = "ApiTags::Scans")]
    async fn capture(&self, body: Json<CaptureScanRequest>) -> CaptureScanResponse {
        let list_id = match parse_optional_id(body.0.list_id.as_deref()) {
            Ok(list_id) => list_id,
            Err(err) => return CaptureScanResponse::from_error(err),
        };
        let params = CaptureScanParams {
            image_path: body.0.image_path,
            list_id,
        };

        match self.capture_use_case.execute(params).await {
            Ok(record) => CaptureScanResponse::Created(Json(record.into())),
            Err(err) => CaptureScanResponse::from_error(err),
        }
    }

    /// Scan history
    ///
    /// The most recent scans first, at most 100.
    #[oai(path = "/scans", method = "get", tag = "ApiTags::Scans")]
    async fn history(&self) -> ScanHistoryResponse {
        match self.get_history_use_case.execute().await {
            Ok(records) => {
                ScanHistoryResponse::Ok(Json(records.into_iter().map(|r| r.into()).collect()))
            }
            Err(err) => ScanHistoryResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Languages supported by the recognition engine
    #[oai(path = "/ocr/languages", method = "get", tag = "ApiTags::Scans")]
    async fn languages(&self) -> ListLanguagesResponse {
        match self.list_languages_use_case.execute().await {
            Ok(languages) => ListLanguagesResponse::Ok(Json(LanguagesResponse { languages })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => ListLanguagesResponse::ServiceUnavailable(json),
                    _ => ListLanguagesResponse::InternalError(json),
                }
            }
        }
    }

    /// Select recognition languages
    #[oai(path = "/ocr/languages", method = "put", tag = "ApiTags::Scans")]
    async fn set_languages(&self, body: Json<SetLanguagesRequest>) -> SetLanguagesResponse {
        let params = SetLanguagesParams {
            languages: body.0.languages,
        };

        match self.set_languages_use_case.execute(params).await {
            Ok(()) => SetLanguagesResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SetLanguagesResponse::BadRequest(json),
                    503 => SetLanguagesResponse::ServiceUnavailable(json),
                    _ => SetLanguagesResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum CaptureScanResponse {
    #[oai(status = 201)]
    Created(Json<ScanRecordResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CaptureScanResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            422 => Self::UnprocessableEntity(json),
            503 => Self::ServiceUnavailable(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum ScanHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ScanRecordResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ListLanguagesResponse {
    #[oai(status = 200)]
    Ok(Json<LanguagesResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum SetLanguagesResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

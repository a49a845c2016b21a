use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, payload::Json};
use serde_json::Value;

use business::domain::settings::model::Settings;
use business::domain::settings::use_cases::clear_all_data::ClearAllDataUseCase;
use business::domain::settings::use_cases::get::GetSettingsUseCase;
use business::domain::settings::use_cases::save::SaveSettingsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct SettingsApi {
    get_use_case: Arc<dyn GetSettingsUseCase>,
    save_use_case: Arc<dyn SaveSettingsUseCase>,
    clear_all_data_use_case: Arc<dyn ClearAllDataUseCase>,
}

impl SettingsApi {
    pub fn new(
        get_use_case: Arc<dyn GetSettingsUseCase>,
        save_use_case: Arc<dyn SaveSettingsUseCase>,
        clear_all_data_use_case: Arc<dyn ClearAllDataUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            save_use_case,
            clear_all_data_use_case,
        }
    }
}

/// User settings and data maintenance API
#[OpenApi]
impl SettingsApi {
    /// Get settings
    ///
    /// Free-form JSON object; empty when nothing was saved yet.
    #[oai(path = "/settings", method = "get", tag = "ApiTags::Settings")]
    async fn get(&self) -> GetSettingsResponse {
        match self.get_use_case.execute().await {
            Ok(settings) => GetSettingsResponse::Ok(Json(Value::Object(settings.into_values()))),
            Err(err) => GetSettingsResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Replace settings
    ///
    /// The body must be a JSON object and replaces the stored one entirely.
    #[oai(path = "/settings", method = "put", tag = "ApiTags::Settings")]
    async fn save(&self, body: Json<Value>) -> SaveSettingsResponse {
        let result = match Settings::try_from(body.0) {
            Ok(settings) => self.save_use_case.execute(settings).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(settings) => SaveSettingsResponse::Ok(Json(Value::Object(settings.into_values()))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SaveSettingsResponse::BadRequest(json),
                    _ => SaveSettingsResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete all data
    ///
    /// Removes every shopping list, the scan history and the settings.
    #[oai(path = "/data", method = "delete", tag = "ApiTags::Settings")]
    async fn clear_all_data(&self) -> ClearAllDataResponse {
        match self.clear_all_data_use_case.execute().await {
            Ok(()) => ClearAllDataResponse::NoContent,
            Err(err) => ClearAllDataResponse::InternalError(err.into_error_response().1),
        }
    }
}

#[derive(ApiResponse)]
pub enum GetSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<Value>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum SaveSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<Value>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ClearAllDataResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

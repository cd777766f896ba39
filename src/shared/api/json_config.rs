use actix_web::web::JsonConfig;

use crate::shared::api::ApiResponse;

/// Malformed request bodies surface as the same envelope every other
/// validation failure uses, instead of actix's default plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let response = ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string());
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

//! HTTP mapping for [`WrenCfgError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use wrencfg_core::error::{ClientCode, WrenCfgError};

/// Handler error: wraps the shared error so it can become a response.
#[derive(Debug)]
pub struct ApiError(pub WrenCfgError);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<WrenCfgError> for ApiError {
    fn from(e: WrenCfgError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ClientCode::UnsupportedVersion | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        tracing::error!(code = code.as_str(), error = %self.0, "request failed");

        let body = Json(json!({
            "error": code.as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::chart::ChartError;
use crate::ephemeris::EphemerisError;

pub enum ApiError {
    /// Missing or malformed request fields, bad JSON, unknown zone or date.
    Validation(String),
    UnsupportedHouseSystem(char),
    Computation(String),
}

impl From<ChartError> for ApiError {
    fn from(e: ChartError) -> Self {
        match e {
            ChartError::Request(_) | ChartError::Time(_) => ApiError::Validation(e.to_string()),
            ChartError::Ephemeris(EphemerisError::UnsupportedHouseSystem(code)) => {
                ApiError::UnsupportedHouseSystem(code)
            }
            ChartError::Ephemeris(_) => ApiError::Computation(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(detail) => {
                log::debug!("Rejected chart request: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new("Missing or invalid parameters")),
                )
                    .into_response()
            }
            ApiError::UnsupportedHouseSystem(code) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::with_message(
                    "Unsupported house system",
                    &code.to_string(),
                )),
            )
                .into_response(),
            ApiError::Computation(detail) => {
                log::error!("Chart computation failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Chart computation failed")),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: None,
        }
    }

    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}

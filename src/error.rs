use crate::models::ParseError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const NOT_FOUND_MESSAGE: &str = "해당 매물을 찾을 수 없습니다.";
pub const UNKNOWN_DISTRICT_MESSAGE: &str = "해당 지역을 찾을 수 없습니다.";
pub const INTERNAL_ERROR_MESSAGE: &str = "요청 처리 중 오류가 발생했습니다.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Listing not found: {0}")]
    NotFound(String),

    #[error("Unknown district: {0}")]
    UnknownDistrict(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParseError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(id) => {
                tracing::debug!("No listing with id {}", id);
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            ApiError::UnknownDistrict(name) => {
                tracing::debug!("No district named {}", name);
                (StatusCode::NOT_FOUND, UNKNOWN_DISTRICT_MESSAGE.to_string())
            }
            ApiError::InvalidParameter(e) => {
                tracing::debug!("Rejected request: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Internal(e) => {
                tracing::error!("Error handling request: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

use axum::{Json, http::StatusCode};
use debugbot_ai::ServiceError;
use debugbot_core::RefactorError;
use serde::Serialize;

/// JSON error response
#[derive(Serialize, Debug)]
pub struct ApiError {
    pub error: String,
    pub code: u16,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (status, Json(Self {
            error: message.into(),
            code: status.as_u16(),
        }))
    }

    pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn from_service(err: &ServiceError) -> (StatusCode, Json<Self>) {
        match err {
            ServiceError::InvalidInput(_) => Self::bad_request(err.to_string()),
            ServiceError::UpstreamEmpty | ServiceError::UpstreamError(_) => {
                Self::internal(err.to_string())
            }
        }
    }

    pub fn from_refactor(err: &RefactorError) -> (StatusCode, Json<Self>) {
        match err {
            RefactorError::Unsupported(_) => Self::bad_request(err.to_string()),
            RefactorError::Format(_) | RefactorError::OptimizeImports(_) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
        }
    }
}

#[derive(Serialize, Debug)]
pub struct RefactorResponse {
    pub code: String,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

use crate::application::ServiceError;
use crate::presentation::rest::dto::ErrorResponse;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
    pub status: StatusCode,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError {
            code: "VALIDATION_ERROR",
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ApiError {
            code: "INVALID_ARGUMENT",
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        ApiError {
            code: "STORE_ERROR",
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn missing_parameter(param: &str) -> Self {
        Self::validation(format!("Mandatory parameter '{}' was not sent", param))
    }

    pub fn invalid_parameter(param: &str, reason: &str) -> Self {
        Self::validation(format!("Illegal parameter '{}': {}", param, reason))
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => ApiError::validation(e.to_string()),
            ServiceError::InvalidArgument(e) => ApiError::invalid_argument(e.to_string()),
            ServiceError::Store(e) => {
                tracing::error!(error = %e, "store failure");
                ApiError::store("Quote store is unavailable")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.code, self.message));
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

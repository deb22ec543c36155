use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::{ErrorResponse, UnknownVariant};
use crate::services::{DemoDataError, SessionError};

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidParameter(#[from] UnknownVariant),

    #[error(transparent)]
    DemoData(#[from] DemoDataError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl ApiError {
    fn error_label(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Validation failed",
            ApiError::InvalidParameter(_) => "Invalid parameter",
            ApiError::DemoData(DemoDataError::InvalidCredentials) => "Invalid credentials",
            ApiError::DemoData(DemoDataError::ProfileNotFound(_)) => "Profile not found",
            ApiError::Session(_) => "Session error",
            ApiError::NotFound(_) => "Not found",
            ApiError::InvalidJson(_) => "Invalid JSON",
            ApiError::InvalidQuery(_) => "Invalid query",
            ApiError::InvalidPath(_) => "Invalid path",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::InvalidParameter(_)
            | ApiError::InvalidJson(_)
            | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::DemoData(DemoDataError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            ApiError::DemoData(DemoDataError::ProfileNotFound(_))
            | ApiError::NotFound(_)
            | ApiError::InvalidPath(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::info!("Request rejected: {}", self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.error_label().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    ApiError::InvalidQuery(err.to_string()).into()
}

/// Handle path parameter errors
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    ApiError::InvalidPath(err.to_string()).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(handle_query_payload_error)
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(handle_path_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::DemoData(DemoDataError::InvalidCredentials).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("Partner not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::DemoData(DemoDataError::ProfileNotFound("9".to_string())).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_invalid_credentials_message() {
        let err = ApiError::from(DemoDataError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid username or password. Please try again.");
    }

    #[test]
    fn test_payload_errors_render_error_body() {
        let err = ApiError::InvalidQuery("weekdays".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_label(), "Invalid query");

        let err = ApiError::InvalidPath("unknown variant".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}

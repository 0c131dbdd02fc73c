use axum::extract::rejection::QueryRejection;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::SneakerId;

#[derive(Debug, Error)]
pub enum SneakerError {
    #[error("Sneaker not found: {0}")]
    NotFound(SneakerId),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

pub type SneakerResult<T> = Result<T, SneakerError>;

/// Convert SneakerError to AppError for standardized error responses
impl From<SneakerError> for AppError {
    fn from(err: SneakerError) -> Self {
        match err {
            SneakerError::NotFound(id) => AppError::NotFound(format!("Sneaker {} not found", id)),
            SneakerError::Validation(errors) => AppError::ValidationError(errors),
            SneakerError::Render(msg) => AppError::Render(msg),
            SneakerError::InvalidFilter(msg) => AppError::BadRequest(msg),
        }
    }
}

impl IntoResponse for SneakerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<QueryRejection> for SneakerError {
    fn from(rejection: QueryRejection) -> Self {
        SneakerError::InvalidFilter(rejection.body_text())
    }
}

impl From<handlebars::RenderError> for SneakerError {
    fn from(err: handlebars::RenderError) -> Self {
        SneakerError::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_becomes_404() {
        let response = SneakerError::NotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_filter_becomes_400() {
        let response = SneakerError::InvalidFilter("unknown brand".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_becomes_400() {
        let response = SneakerError::Validation(ValidationErrors::new()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

//! Application error type mapping to HTTP status codes and envelope format.

use axum::response::{IntoResponse, Response};

use botforge_types::error::BotError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Generation and record-store errors.
    Bot(BotError),
    /// Request validation error.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<BotError> for AppError {
    fn from(e: BotError) -> Self {
        AppError::Bot(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Bot(BotError::NotFound) => {
                ("BOT_NOT_FOUND", "Generated bot not found".to_string())
            }
            AppError::Bot(BotError::InvalidConfig(msg)) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Bot(BotError::Render(msg)) => ("GENERATION_FAILED", msg.clone()),
            AppError::Bot(BotError::Storage(msg)) => ("STORAGE_ERROR", msg.clone()),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Internal(msg) => ("INTERNAL_ERROR", msg.clone()),
        };

        // Status code is derived from the error code inside the envelope.
        ApiResponse::error(code, &message, String::new(), 0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(status_of(AppError::Bot(BotError::NotFound)), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_config_maps_to_400() {
        assert_eq!(
            status_of(AppError::Bot(BotError::InvalidConfig("bad".into()))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_render_and_storage_map_to_500() {
        assert_eq!(
            status_of(AppError::Bot(BotError::Render("lost placeholder".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::Bot(BotError::Storage("disk full".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

// storefront/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  /// Missing required field, malformed body or out-of-range value.
  #[error("{0}")]
  Validation(String),

  #[error("{0}")]
  AlreadyExists(String),

  #[error("{0}")]
  InvalidCredentials(String),

  #[error("{0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storage Error: {0}")]
  Storage(#[from] StoreError),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
      AppError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    // Client mistakes are routine; only server-side failures are errors.
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::debug!(application_error = %self, %status, "Responding with client error");
    }

    let message = match self {
      AppError::Validation(m) | AppError::AlreadyExists(m) | AppError::InvalidCredentials(m) | AppError::NotFound(m) => {
        m.as_str()
      }
      AppError::Storage(_) => "Storage operation failed",
      AppError::Config(_) | AppError::Internal(_) => "An internal error occurred",
    };
    HttpResponse::build(status).json(json!({ "message": message }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use serde::Serialize;
use std::fmt;

use crate::domain::auth::SignInError;
use crate::domain::invoice::InvoiceError;

/// Error body returned when a handler fails fatally.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
  pub error: String,
  pub message: String,
}

/// Fatal errors escaping a handler.
///
/// Soft failures (validation errors, create/update statement failures, and
/// categorized sign-in failures) travel inside the mutation state and never
/// reach this type. What does reach it — a failed delete, an uncategorized
/// sign-in failure — renders as the generic error page.
#[derive(Debug)]
pub enum ApiError {
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let ApiError::Internal(msg) = self;
    // Don't expose internal error details to the client
    tracing::error!("Internal error: {}", msg);

    let body = ErrorResponse {
      error: "internal_error".to_string(),
      message: "An internal server error occurred".to_string(),
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(body)
  }
}

impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    ApiError::Internal(error.to_string())
  }
}

impl From<SignInError> for ApiError {
  fn from(error: SignInError) -> Self {
    ApiError::Internal(error.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_invoice_error_converts_to_internal() {
    let api_error: ApiError = InvoiceError::Database(sqlx::Error::PoolClosed).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}

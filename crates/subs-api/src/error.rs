//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// One entry per violated field constraint.
  #[error("validation failed: {}", .0.join("; "))]
  Validation(Vec<String>),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<subs_core::Error> for ApiError {
  fn from(e: subs_core::Error) -> Self {
    use subs_core::Error as E;
    match e {
      E::ContactNotFound(_) => ApiError::NotFound("Contact not found".into()),
      E::ProductNotFound(_) => ApiError::NotFound("Product not found".into()),
      E::SubscriptionNotFound(_) => {
        ApiError::NotFound("Subscription not found".into())
      }
      E::InvalidDate(_) => ApiError::BadRequest(
        "Invalid date format (expected YYYY-MM-DD)".into(),
      ),
      E::Store(e) => ApiError::Store(e),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(message) => {
        (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
      }
      ApiError::BadRequest(message) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
      }
      ApiError::Validation(errors) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure while handling request");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "message": "Internal server error" })),
        )
          .into_response()
      }
    }
  }
}

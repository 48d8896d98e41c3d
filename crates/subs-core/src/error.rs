//! Error types for `subs-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("contact not found: {0}")]
  ContactNotFound(i64),

  #[error("product not found: {0}")]
  ProductNotFound(i64),

  #[error("subscription not found: {0}")]
  SubscriptionNotFound(i64),

  #[error("invalid date {0:?} (expected YYYY-MM-DD)")]
  InvalidDate(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Box a backend error into [`Error::Store`].
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

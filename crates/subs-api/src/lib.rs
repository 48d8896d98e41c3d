//! JSON REST API for subscriptions.
//!
//! Exposes an axum [`Router`] backed by any
//! [`subs_core::store::SubscriptionStore`]. TLS, tracing layers and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = subs_api::api_router(Arc::new(store));
//! ```

pub mod error;
pub mod payload;
pub mod service;
pub mod subscriptions;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use subs_core::store::SubscriptionStore;

pub use error::ApiError;
pub use service::SubscriptionService;

/// Build the API router for `store`.
///
/// `GET /subscription/{id}` takes a contact id while `PUT` and `DELETE` on
/// the same path take a subscription id.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SubscriptionStore + 'static,
{
  Router::new()
    .route("/subscription/", post(subscriptions::create::<S>))
    .route(
      "/subscription/{id}",
      get(subscriptions::list_by_contact::<S>)
        .put(subscriptions::update::<S>)
        .delete(subscriptions::delete::<S>),
    )
    .with_state(SubscriptionService::new(store))
}

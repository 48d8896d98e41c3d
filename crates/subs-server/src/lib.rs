//! HTTP server wiring for the subscription API.
//!
//! Wraps [`subs_api::api_router`] with request tracing and owns the runtime
//! configuration.

pub mod settings;

pub use settings::{ServerConfig, load_config};

use std::sync::Arc;

use axum::Router;
use subs_core::store::SubscriptionStore;
use tower_http::trace::TraceLayer;

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router with a per-request tracing span.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: SubscriptionStore + 'static,
{
  subs_api::api_router(store).layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────

//! The `SubscriptionStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `subs-store-sqlite`).
//! The service layer in `subs-api` depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use chrono::NaiveDate;

use crate::model::{
  Contact, NewSubscription, Product, Subscription, SubscriptionSummary,
};

/// Abstraction over a relational backend holding contacts, products and
/// subscriptions.
///
/// Point lookups return `Ok(None)` when the row is absent; absence is never
/// an error at this level.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait SubscriptionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Point lookups ─────────────────────────────────────────────────────

  fn find_contact_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Look a contact up by its natural key. Matching is exact.
  fn find_contact_by_name_and_first_name<'a>(
    &'a self,
    name: &'a str,
    first_name: &'a str,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + 'a;

  fn find_product_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Product>, Self::Error>> + Send + '_;

  fn find_subscription_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Subscription>, Self::Error>> + Send + '_;

  // ── Queries ───────────────────────────────────────────────────────────

  /// All subscriptions of a contact joined with their product, ordered by
  /// subscription id. Returns an empty list for unknown contacts; callers
  /// that need to distinguish must look the contact up first.
  fn list_subscriptions_for_contact(
    &self,
    contact_id: i64,
  ) -> impl Future<Output = Result<Vec<SubscriptionSummary>, Self::Error>>
  + Send
  + '_;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a subscription, creating its contact first when the input
  /// carries [`ContactRef::New`](crate::model::ContactRef::New).
  ///
  /// Both inserts happen in one transaction: a failure leaves no contact
  /// behind.
  fn create_subscription(
    &self,
    input: NewSubscription,
  ) -> impl Future<Output = Result<Subscription, Self::Error>> + Send + '_;

  /// Replace the begin and end dates of a subscription. Contact and product
  /// are left untouched. Returns `None` if the row does not exist.
  fn update_subscription_dates(
    &self,
    id: i64,
    begin_date: NaiveDate,
    end_date: NaiveDate,
  ) -> impl Future<Output = Result<Option<Subscription>, Self::Error>> + Send + '_;

  /// Permanently remove a subscription. Returns `false` if there was nothing
  /// to remove.
  fn delete_subscription(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}

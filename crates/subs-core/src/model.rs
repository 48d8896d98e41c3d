//! Domain entities: contacts, products and the subscriptions linking them.
//!
//! Identifiers are store-assigned integers. Relationships are plain foreign
//! keys; traversals (contact → subscriptions) are explicit store queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person, identified naturally by `(name, first_name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:         i64,
  pub name:       String,
  pub first_name: String,
}

/// A subscribable offering. Read-only from the API's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id:    i64,
  pub label: String,
}

/// A time-bounded association between one contact and one product.
///
/// No ordering between `begin_date` and `end_date` is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
  pub id:         i64,
  pub contact_id: i64,
  pub product_id: i64,
  pub begin_date: NaiveDate,
  pub end_date:   NaiveDate,
}

/// One row of a contact's subscription listing, joined with its product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSummary {
  pub subscription_id: i64,
  pub product_id:      i64,
  pub product_label:   String,
  pub begin_date:      NaiveDate,
  pub end_date:        NaiveDate,
}

/// How a new subscription refers to its contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactRef {
  /// A contact that was found before the write.
  Existing(i64),
  /// A contact to create alongside the subscription. If another writer
  /// created the same natural key in the meantime, that row is reused.
  New { name: String, first_name: String },
}

/// Input to [`SubscriptionStore::create_subscription`](crate::store::SubscriptionStore::create_subscription).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscription {
  pub contact:    ContactRef,
  pub product_id: i64,
  pub begin_date: NaiveDate,
  pub end_date:   NaiveDate,
}

//! [`SubscriptionService`] — orchestrates lookups, date parsing and writes
//! for the four subscription operations.
//!
//! Inputs arrive already field-validated by the handlers; the service only
//! enforces existence rules and the strict date format.

use std::sync::Arc;

use subs_core::{
  Error, Result,
  date::parse_date,
  model::{ContactRef, NewSubscription, Subscription, SubscriptionSummary},
  store::SubscriptionStore,
};

/// Input for [`SubscriptionService::create`].
#[derive(Debug, Clone)]
pub struct CreateSubscription {
  pub contact_name:       String,
  pub contact_first_name: String,
  pub product_id:         i64,
  pub begin_date:         String,
  pub end_date:           String,
}

/// Input for [`SubscriptionService::update`]. Only the dates are mutable.
#[derive(Debug, Clone)]
pub struct UpdateSubscription {
  pub begin_date: String,
  pub end_date:   String,
}

pub struct SubscriptionService<S> {
  store: Arc<S>,
}

impl<S> Clone for SubscriptionService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: SubscriptionStore> SubscriptionService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Subscriptions of `contact_id`, joined with their products.
  pub async fn list_by_contact(
    &self,
    contact_id: i64,
  ) -> Result<Vec<SubscriptionSummary>> {
    self
      .store
      .find_contact_by_id(contact_id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::ContactNotFound(contact_id))?;

    let rows = self
      .store
      .list_subscriptions_for_contact(contact_id)
      .await
      .map_err(Error::store)?;

    tracing::debug!(contact_id, count = rows.len(), "listed subscriptions");
    Ok(rows)
  }

  /// Subscribe a contact (found or created by name) to an existing product.
  ///
  /// A new contact is only written together with the subscription, once the
  /// product and both dates have been checked.
  pub async fn create(&self, input: CreateSubscription) -> Result<Subscription> {
    let existing = self
      .store
      .find_contact_by_name_and_first_name(
        &input.contact_name,
        &input.contact_first_name,
      )
      .await
      .map_err(Error::store)?;

    let contact = match existing {
      Some(c) => ContactRef::Existing(c.id),
      None => ContactRef::New {
        name:       input.contact_name,
        first_name: input.contact_first_name,
      },
    };

    self
      .store
      .find_product_by_id(input.product_id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::ProductNotFound(input.product_id))?;

    let begin_date = parse_date(&input.begin_date)?;
    let end_date = parse_date(&input.end_date)?;

    let new_contact = matches!(contact, ContactRef::New { .. });
    let subscription = self
      .store
      .create_subscription(NewSubscription {
        contact,
        product_id: input.product_id,
        begin_date,
        end_date,
      })
      .await
      .map_err(Error::store)?;

    tracing::info!(
      subscription_id = subscription.id,
      contact_id = subscription.contact_id,
      product_id = subscription.product_id,
      new_contact,
      "subscription created"
    );
    Ok(subscription)
  }

  /// Replace the dates of an existing subscription.
  pub async fn update(
    &self,
    id: i64,
    input: UpdateSubscription,
  ) -> Result<Subscription> {
    self
      .store
      .find_subscription_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::SubscriptionNotFound(id))?;

    let begin_date = parse_date(&input.begin_date)?;
    let end_date = parse_date(&input.end_date)?;

    // The row can vanish between the lookup and the write.
    let updated = self
      .store
      .update_subscription_dates(id, begin_date, end_date)
      .await
      .map_err(Error::store)?
      .ok_or(Error::SubscriptionNotFound(id))?;

    tracing::info!(subscription_id = id, %begin_date, %end_date, "subscription updated");
    Ok(updated)
  }

  /// Permanently remove a subscription.
  pub async fn delete(&self, id: i64) -> Result<()> {
    self
      .store
      .find_subscription_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::SubscriptionNotFound(id))?;

    let deleted = self
      .store
      .delete_subscription(id)
      .await
      .map_err(Error::store)?;
    if !deleted {
      return Err(Error::SubscriptionNotFound(id));
    }

    tracing::info!(subscription_id = id, "subscription deleted");
    Ok(())
  }
}

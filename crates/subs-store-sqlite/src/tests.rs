//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use subs_core::{
  model::{ContactRef, NewSubscription},
  store::SubscriptionStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_sub(contact: ContactRef, product_id: i64) -> NewSubscription {
  NewSubscription {
    contact,
    product_id,
    begin_date: date(2024, 1, 1),
    end_date: date(2024, 12, 31),
  }
}

fn doe() -> ContactRef {
  ContactRef::New { name: "Doe".into(), first_name: "John".into() }
}

// ─── Lookups ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_rows_return_none() {
  let s = store().await;
  assert!(s.find_contact_by_id(1).await.unwrap().is_none());
  assert!(s.find_product_by_id(1).await.unwrap().is_none());
  assert!(s.find_subscription_by_id(1).await.unwrap().is_none());
  assert!(
    s.find_contact_by_name_and_first_name("Doe", "John")
      .await
      .unwrap()
      .is_none()
  );
}

#[tokio::test]
async fn contact_lookup_by_id_and_natural_key() {
  let s = store().await;
  let added = s.add_contact("Doe", "John").await.unwrap();

  let by_id = s.find_contact_by_id(added.id).await.unwrap().unwrap();
  assert_eq!(by_id, added);

  let by_key = s
    .find_contact_by_name_and_first_name("Doe", "John")
    .await
    .unwrap()
    .unwrap();
  assert_eq!(by_key.id, added.id);

  // Natural-key matching is exact, not by either half.
  assert!(
    s.find_contact_by_name_and_first_name("Doe", "Jane")
      .await
      .unwrap()
      .is_none()
  );
}

#[tokio::test]
async fn product_lookup() {
  let s = store().await;
  let p = s.add_product("Newspaper").await.unwrap();
  let fetched = s.find_product_by_id(p.id).await.unwrap().unwrap();
  assert_eq!(fetched.label, "Newspaper");
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_with_new_contact_inserts_both() {
  let s = store().await;
  let p = s.add_product("Magazine").await.unwrap();

  let sub = s.create_subscription(new_sub(doe(), p.id)).await.unwrap();
  assert_eq!(sub.product_id, p.id);

  let contact = s
    .find_contact_by_name_and_first_name("Doe", "John")
    .await
    .unwrap()
    .unwrap();
  assert_eq!(contact.id, sub.contact_id);

  let fetched = s.find_subscription_by_id(sub.id).await.unwrap().unwrap();
  assert_eq!(fetched, sub);
  assert_eq!(fetched.begin_date, date(2024, 1, 1));
  assert_eq!(fetched.end_date, date(2024, 12, 31));
}

#[tokio::test]
async fn create_new_contact_reuses_existing_natural_key() {
  let s = store().await;
  let p = s.add_product("Magazine").await.unwrap();
  let existing = s.add_contact("Doe", "John").await.unwrap();

  let sub = s.create_subscription(new_sub(doe(), p.id)).await.unwrap();
  assert_eq!(sub.contact_id, existing.id);
}

#[tokio::test]
async fn create_with_existing_contact() {
  let s = store().await;
  let p = s.add_product("Magazine").await.unwrap();
  let c = s.add_contact("Roe", "Jane").await.unwrap();

  let sub = s
    .create_subscription(new_sub(ContactRef::Existing(c.id), p.id))
    .await
    .unwrap();
  assert_eq!(sub.contact_id, c.id);
}

#[tokio::test]
async fn failed_create_leaves_no_contact_behind() {
  let s = store().await;

  // Product 42 does not exist; the foreign key rejects the subscription and
  // the contact insert is rolled back with it.
  let result = s.create_subscription(new_sub(doe(), 42)).await;
  assert!(result.is_err());

  assert!(
    s.find_contact_by_name_and_first_name("Doe", "John")
      .await
      .unwrap()
      .is_none()
  );
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_for_contact_joins_products_in_id_order() {
  let s = store().await;
  let a = s.add_product("A").await.unwrap();
  let b = s.add_product("B").await.unwrap();
  let c = s.add_contact("Doe", "John").await.unwrap();
  let other = s.add_contact("Roe", "Jane").await.unwrap();

  let first = s
    .create_subscription(new_sub(ContactRef::Existing(c.id), b.id))
    .await
    .unwrap();
  s.create_subscription(new_sub(ContactRef::Existing(other.id), a.id))
    .await
    .unwrap();
  let second = s
    .create_subscription(new_sub(ContactRef::Existing(c.id), a.id))
    .await
    .unwrap();

  let list = s.list_subscriptions_for_contact(c.id).await.unwrap();
  assert_eq!(list.len(), 2);
  assert_eq!(list[0].subscription_id, first.id);
  assert_eq!(list[0].product_label, "B");
  assert_eq!(list[1].subscription_id, second.id);
  assert_eq!(list[1].product_id, a.id);
  assert_eq!(list[1].begin_date, date(2024, 1, 1));
}

#[tokio::test]
async fn list_for_unknown_contact_is_empty() {
  let s = store().await;
  assert!(s.list_subscriptions_for_contact(7).await.unwrap().is_empty());
}

// ─── Update / delete ─────────────────────────────────────────────────────────

#[tokio::test]
async fn update_dates_only() {
  let s = store().await;
  let p = s.add_product("Magazine").await.unwrap();
  let sub = s.create_subscription(new_sub(doe(), p.id)).await.unwrap();

  let updated = s
    .update_subscription_dates(sub.id, date(2024, 2, 1), date(2025, 1, 31))
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.begin_date, date(2024, 2, 1));
  assert_eq!(updated.end_date, date(2025, 1, 31));
  assert_eq!(updated.contact_id, sub.contact_id);
  assert_eq!(updated.product_id, sub.product_id);
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;
  let res = s
    .update_subscription_dates(99, date(2024, 2, 1), date(2024, 3, 1))
    .await
    .unwrap();
  assert!(res.is_none());
}

#[tokio::test]
async fn delete_is_permanent() {
  let s = store().await;
  let p = s.add_product("Magazine").await.unwrap();
  let sub = s.create_subscription(new_sub(doe(), p.id)).await.unwrap();

  assert!(s.delete_subscription(sub.id).await.unwrap());
  assert!(s.find_subscription_by_id(sub.id).await.unwrap().is_none());
  assert!(!s.delete_subscription(sub.id).await.unwrap());
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn fixtures_load_once() {
  let s = store().await;
  assert!(s.load_fixtures().await.unwrap());
  assert!(!s.load_fixtures().await.unwrap());

  let c = s
    .find_contact_by_name_and_first_name("Name3", "Firstname3")
    .await
    .unwrap()
    .unwrap();
  let list = s.list_subscriptions_for_contact(c.id).await.unwrap();
  assert_eq!(list.len(), 5);
  assert!(list.iter().all(|row| row.begin_date == date(2025, 1, 1)));
  assert!(list.iter().all(|row| row.end_date == date(2025, 12, 31)));
  assert_eq!(list[0].product_label, "Product1");
}

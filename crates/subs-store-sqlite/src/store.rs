//! [`SqliteStore`] — the SQLite implementation of [`SubscriptionStore`].

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::OptionalExtension as _;

use subs_core::{
  model::{
    Contact, ContactRef, NewSubscription, Product, Subscription,
    SubscriptionSummary,
  },
  store::SubscriptionStore,
};

use crate::{
  Result,
  encode::{RawSubscription, RawSummary, encode_date},
  schema::SCHEMA,
};

const SUBSCRIPTION_COLUMNS: &str =
  "id, contact_id, product_id, begin_date, end_date";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A subscription store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a contact directly. The API creates contacts only as a side
  /// effect of subscribing; this is for seeding and tests.
  pub async fn add_contact(
    &self,
    name: impl Into<String>,
    first_name: impl Into<String>,
  ) -> Result<Contact> {
    let name       = name.into();
    let first_name = first_name.into();
    let (n, f)     = (name.clone(), first_name.clone());

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (name, first_name) VALUES (?1, ?2)",
          rusqlite::params![n, f],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Contact { id, name, first_name })
  }

  /// Insert a product. Products are reference data the API only reads.
  pub async fn add_product(&self, label: impl Into<String>) -> Result<Product> {
    let label = label.into();
    let l     = label.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute("INSERT INTO products (label) VALUES (?1)", rusqlite::params![l])?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Product { id, label })
  }
}

// ─── SubscriptionStore impl ──────────────────────────────────────────────────

impl SubscriptionStore for SqliteStore {
  type Error = crate::Error;

  // ── Point lookups ─────────────────────────────────────────────────────────

  async fn find_contact_by_id(&self, id: i64) -> Result<Option<Contact>> {
    let contact = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, name, first_name FROM contacts WHERE id = ?1",
            rusqlite::params![id],
            |row| {
              Ok(Contact {
                id:         row.get(0)?,
                name:       row.get(1)?,
                first_name: row.get(2)?,
              })
            },
          )
          .optional()?)
      })
      .await?;
    Ok(contact)
  }

  async fn find_contact_by_name_and_first_name(
    &self,
    name:       &str,
    first_name: &str,
  ) -> Result<Option<Contact>> {
    let name       = name.to_owned();
    let first_name = first_name.to_owned();

    let contact = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, name, first_name FROM contacts
             WHERE name = ?1 AND first_name = ?2",
            rusqlite::params![name, first_name],
            |row| {
              Ok(Contact {
                id:         row.get(0)?,
                name:       row.get(1)?,
                first_name: row.get(2)?,
              })
            },
          )
          .optional()?)
      })
      .await?;
    Ok(contact)
  }

  async fn find_product_by_id(&self, id: i64) -> Result<Option<Product>> {
    let product = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, label FROM products WHERE id = ?1",
            rusqlite::params![id],
            |row| Ok(Product { id: row.get(0)?, label: row.get(1)? }),
          )
          .optional()?)
      })
      .await?;
    Ok(product)
  }

  async fn find_subscription_by_id(&self, id: i64) -> Result<Option<Subscription>> {
    let raw: Option<RawSubscription> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions WHERE id = ?1"),
            rusqlite::params![id],
            RawSubscription::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawSubscription::into_subscription).transpose()
  }

  // ── Queries ───────────────────────────────────────────────────────────────

  async fn list_subscriptions_for_contact(
    &self,
    contact_id: i64,
  ) -> Result<Vec<SubscriptionSummary>> {
    let raws: Vec<RawSummary> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT s.id, p.id, p.label, s.begin_date, s.end_date
           FROM subscriptions s
           JOIN products p ON p.id = s.product_id
           WHERE s.contact_id = ?1
           ORDER BY s.id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![contact_id], RawSummary::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSummary::into_summary).collect()
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn create_subscription(&self, input: NewSubscription) -> Result<Subscription> {
    let contact    = input.contact;
    let product_id = input.product_id;
    let begin_str  = encode_date(input.begin_date);
    let end_str    = encode_date(input.end_date);

    let (id, contact_id) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let contact_id: i64 = match contact {
          ContactRef::Existing(id) => id,
          ContactRef::New { name, first_name } => {
            // A concurrent request may have created the same natural key
            // since the caller's lookup; reuse that row instead of failing.
            tx.execute(
              "INSERT INTO contacts (name, first_name) VALUES (?1, ?2)
               ON CONFLICT (name, first_name) DO NOTHING",
              rusqlite::params![name, first_name],
            )?;
            tx.query_row(
              "SELECT id FROM contacts WHERE name = ?1 AND first_name = ?2",
              rusqlite::params![name, first_name],
              |r| r.get(0),
            )?
          }
        };

        tx.execute(
          "INSERT INTO subscriptions (contact_id, product_id, begin_date, end_date)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![contact_id, product_id, begin_str, end_str],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        Ok((id, contact_id))
      })
      .await?;

    Ok(Subscription {
      id,
      contact_id,
      product_id,
      begin_date: input.begin_date,
      end_date: input.end_date,
    })
  }

  async fn update_subscription_dates(
    &self,
    id:         i64,
    begin_date: NaiveDate,
    end_date:   NaiveDate,
  ) -> Result<Option<Subscription>> {
    let begin_str = encode_date(begin_date);
    let end_str   = encode_date(end_date);

    let raw: Option<RawSubscription> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE subscriptions SET begin_date = ?1, end_date = ?2 WHERE id = ?3",
          rusqlite::params![begin_str, end_str, id],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(conn
          .query_row(
            &format!("SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions WHERE id = ?1"),
            rusqlite::params![id],
            RawSubscription::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawSubscription::into_subscription).transpose()
  }

  async fn delete_subscription(&self, id: i64) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM subscriptions WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(deleted > 0)
  }
}

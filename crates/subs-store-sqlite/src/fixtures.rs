//! Demo data for local development.

use rusqlite::OptionalExtension as _;

use crate::{Result, SqliteStore};

const FIXTURE_COUNT: usize = 5;
const FIXTURE_BEGIN: &str = "2025-01-01";
const FIXTURE_END: &str = "2025-12-31";

impl SqliteStore {
  /// Seed five contacts and five products, each contact subscribed to every
  /// product for calendar year 2025.
  ///
  /// Runs in a single transaction and does nothing if any product already
  /// exists. Returns whether data was inserted.
  pub async fn load_fixtures(&self) -> Result<bool> {
    let loaded = self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;

        let populated = tx
          .query_row("SELECT 1 FROM products LIMIT 1", [], |_| Ok(()))
          .optional()?
          .is_some();
        if populated {
          return Ok(false);
        }

        let mut contact_ids = Vec::with_capacity(FIXTURE_COUNT);
        for i in 1..=FIXTURE_COUNT {
          tx.execute(
            "INSERT INTO contacts (name, first_name) VALUES (?1, ?2)
             ON CONFLICT (name, first_name) DO NOTHING",
            rusqlite::params![format!("Name{i}"), format!("Firstname{i}")],
          )?;
          let id: i64 = tx.query_row(
            "SELECT id FROM contacts WHERE name = ?1 AND first_name = ?2",
            rusqlite::params![format!("Name{i}"), format!("Firstname{i}")],
            |r| r.get(0),
          )?;
          contact_ids.push(id);
        }

        let mut product_ids = Vec::with_capacity(FIXTURE_COUNT);
        for i in 1..=FIXTURE_COUNT {
          tx.execute(
            "INSERT INTO products (label) VALUES (?1)",
            rusqlite::params![format!("Product{i}")],
          )?;
          product_ids.push(tx.last_insert_rowid());
        }

        for contact_id in &contact_ids {
          for product_id in &product_ids {
            tx.execute(
              "INSERT INTO subscriptions (contact_id, product_id, begin_date, end_date)
               VALUES (?1, ?2, ?3, ?4)",
              rusqlite::params![contact_id, product_id, FIXTURE_BEGIN, FIXTURE_END],
            )?;
          }
        }

        tx.commit()?;
        Ok(true)
      })
      .await?;

    if loaded {
      tracing::info!(
        contacts = FIXTURE_COUNT,
        products = FIXTURE_COUNT,
        "loaded demo fixtures"
      );
    } else {
      tracing::info!("store already holds products; skipping fixtures");
    }
    Ok(loaded)
  }
}

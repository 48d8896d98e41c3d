//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` strings. Ids are native integers and need
//! no conversion.

use chrono::NaiveDate;
use subs_core::{
  date::{DATE_FORMAT, format_date},
  model::{Subscription, SubscriptionSummary},
};

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { format_date(d) }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `subscriptions` row.
pub struct RawSubscription {
  pub id:         i64,
  pub contact_id: i64,
  pub product_id: i64,
  pub begin_date: String,
  pub end_date:   String,
}

impl RawSubscription {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawSubscription {
      id:         row.get(0)?,
      contact_id: row.get(1)?,
      product_id: row.get(2)?,
      begin_date: row.get(3)?,
      end_date:   row.get(4)?,
    })
  }

  pub fn into_subscription(self) -> Result<Subscription> {
    Ok(Subscription {
      id:         self.id,
      contact_id: self.contact_id,
      product_id: self.product_id,
      begin_date: decode_date(&self.begin_date)?,
      end_date:   decode_date(&self.end_date)?,
    })
  }
}

/// Raw values read from a `subscriptions` row joined with `products`.
pub struct RawSummary {
  pub subscription_id: i64,
  pub product_id:      i64,
  pub product_label:   String,
  pub begin_date:      String,
  pub end_date:        String,
}

impl RawSummary {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawSummary {
      subscription_id: row.get(0)?,
      product_id:      row.get(1)?,
      product_label:   row.get(2)?,
      begin_date:      row.get(3)?,
      end_date:        row.get(4)?,
    })
  }

  pub fn into_summary(self) -> Result<SubscriptionSummary> {
    Ok(SubscriptionSummary {
      subscription_id: self.subscription_id,
      product_id:      self.product_id,
      product_label:   self.product_label,
      begin_date:      decode_date(&self.begin_date)?,
      end_date:        decode_date(&self.end_date)?,
    })
  }
}

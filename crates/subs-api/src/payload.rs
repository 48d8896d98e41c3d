//! Request bodies and their field-level validation.
//!
//! Bodies are decoded leniently: an empty body or `null` reads as `{}` and
//! absent or `null` fields fall back to an empty string or zero. Constraint
//! checks then run over every field and report all violations at once as
//! `"<field>: <message>"` strings.

use serde::{Deserialize, de::DeserializeOwned};
use subs_core::date::parse_date;

use crate::{
  error::ApiError,
  service::{CreateSubscription, UpdateSubscription},
};

const NOT_BLANK: &str = "This value should not be blank.";
const POSITIVE: &str = "This value should be positive.";
const POSITIVE_OR_ZERO: &str = "This value should be either positive or zero.";
const INVALID_DATE: &str = "This value is not a valid date.";

/// Decode a JSON body, treating an empty body or `null` as the default value.
pub fn decode<T>(body: &[u8]) -> Result<T, ApiError>
where
  T: DeserializeOwned + Default,
{
  if body.iter().all(u8::is_ascii_whitespace) {
    return Ok(T::default());
  }
  serde_json::from_slice::<Option<T>>(body)
    .map(Option::unwrap_or_default)
    .map_err(|e| ApiError::Validation(vec![format!("body: {e}")]))
}

// ─── Violations ──────────────────────────────────────────────────────────────

/// Accumulates constraint violations in field order.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
  fn push(&mut self, field: &str, message: &str) {
    self.0.push(format!("{field}: {message}"));
  }

  pub fn not_blank(&mut self, field: &str, value: &str) {
    if value.trim().is_empty() {
      self.push(field, NOT_BLANK);
    }
  }

  pub fn positive(&mut self, field: &str, value: i64) {
    if value <= 0 {
      self.push(field, POSITIVE);
    }
  }

  pub fn positive_or_zero(&mut self, field: &str, value: i64) {
    if value < 0 {
      self.push(field, POSITIVE_OR_ZERO);
    }
  }

  /// Blank values are left to [`Violations::not_blank`].
  pub fn date(&mut self, field: &str, value: &str) {
    if !value.trim().is_empty() && parse_date(value).is_err() {
      self.push(field, INVALID_DATE);
    }
  }

  pub fn finish(self) -> Result<(), ApiError> {
    if self.0.is_empty() {
      Ok(())
    } else {
      Err(ApiError::Validation(self.0))
    }
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// Body of `POST /subscription/`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBody {
  pub contact_name:       Option<String>,
  pub contact_first_name: Option<String>,
  pub product_id:         Option<i64>,
  pub begin_date:         Option<String>,
  pub end_date:           Option<String>,
}

impl CreateBody {
  /// Check every field and convert into service input.
  pub fn validate(self) -> Result<CreateSubscription, ApiError> {
    let input = CreateSubscription {
      contact_name:       self.contact_name.unwrap_or_default(),
      contact_first_name: self.contact_first_name.unwrap_or_default(),
      product_id:         self.product_id.unwrap_or_default(),
      begin_date:         self.begin_date.unwrap_or_default(),
      end_date:           self.end_date.unwrap_or_default(),
    };

    let mut v = Violations::default();
    v.not_blank("contactName", &input.contact_name);
    v.not_blank("contactFirstName", &input.contact_first_name);
    v.positive("productId", input.product_id);
    v.not_blank("beginDate", &input.begin_date);
    v.date("beginDate", &input.begin_date);
    v.not_blank("endDate", &input.end_date);
    v.date("endDate", &input.end_date);
    v.finish()?;

    Ok(input)
  }
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// Body of `PUT /subscription/{id}`.
///
/// Contact and product fields are accepted for compatibility with the create
/// body but never applied; only the dates change.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateBody {
  pub contact_name:       Option<String>,
  pub contact_first_name: Option<String>,
  pub product_id:         Option<i64>,
  pub begin_date:         Option<String>,
  pub end_date:           Option<String>,
}

impl UpdateBody {
  /// Check the fields that are present and convert into service input.
  ///
  /// Missing dates pass here and are rejected by the service's date parser.
  pub fn validate(self) -> Result<UpdateSubscription, ApiError> {
    let mut v = Violations::default();
    if let Some(product_id) = self.product_id {
      v.positive_or_zero("productId", product_id);
    }

    let input = UpdateSubscription {
      begin_date: self.begin_date.unwrap_or_default(),
      end_date:   self.end_date.unwrap_or_default(),
    };
    v.date("beginDate", &input.begin_date);
    v.date("endDate", &input.end_date);
    v.finish()?;

    Ok(input)
  }
}

//! Handlers for `/subscription` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/subscription/:id` | `id` is a **contact** id; 404 if unknown |
//! | `POST`   | `/subscription/` | Body: [`CreateBody`]; returns 201 |
//! | `PUT`    | `/subscription/:id` | Body: [`UpdateBody`]; only dates change |
//! | `DELETE` | `/subscription/:id` | 404 if unknown |

use axum::{
  Json,
  body::Bytes,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;
use subs_core::{
  date::format_date, model::SubscriptionSummary, store::SubscriptionStore,
};

use crate::{
  error::ApiError,
  payload::{CreateBody, UpdateBody, decode},
  service::SubscriptionService,
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// One element of the `GET /subscription/:id` response array.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionItem {
  pub subscription_id:            i64,
  pub subscription_product_id:    i64,
  pub subscription_product_label: String,
  pub subscription_start_date:    String,
  pub subscription_end_date:      String,
}

impl From<SubscriptionSummary> for SubscriptionItem {
  fn from(s: SubscriptionSummary) -> Self {
    SubscriptionItem {
      subscription_id:            s.subscription_id,
      subscription_product_id:    s.product_id,
      subscription_product_label: s.product_label,
      subscription_start_date:    format_date(s.begin_date),
      subscription_end_date:      format_date(s.end_date),
    }
  }
}

/// `GET /subscription/:id` — subscriptions of contact `id`.
pub async fn list_by_contact<S>(
  State(service): State<SubscriptionService<S>>,
  Path(contact_id): Path<i64>,
) -> Result<Json<Vec<SubscriptionItem>>, ApiError>
where
  S: SubscriptionStore,
{
  let rows = service.list_by_contact(contact_id).await?;
  Ok(Json(rows.into_iter().map(SubscriptionItem::from).collect()))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /subscription/` — returns 201 with the new subscription and contact ids.
pub async fn create<S>(
  State(service): State<SubscriptionService<S>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubscriptionStore,
{
  let input = decode::<CreateBody>(&body)?.validate()?;
  let subscription = service.create(input).await?;
  Ok((
    StatusCode::CREATED,
    Json(json!({
      "message": "Subscription created successfully",
      "subscriptionId": subscription.id,
      "userId": subscription.contact_id,
    })),
  ))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /subscription/:id` — replaces the begin and end dates.
pub async fn update<S>(
  State(service): State<SubscriptionService<S>>,
  Path(id): Path<i64>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubscriptionStore,
{
  let input = decode::<UpdateBody>(&body)?.validate()?;
  service.update(id, input).await?;
  Ok(Json(json!({ "message": "Subscription updated successfully" })))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /subscription/:id`
pub async fn delete<S>(
  State(service): State<SubscriptionService<S>>,
  Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubscriptionStore,
{
  service.delete(id).await?;
  Ok(Json(json!({ "message": "Subscription deleted successfully" })))
}

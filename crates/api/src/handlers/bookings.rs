use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::{require_date, require_str, AppState};
use crate::ApiError;
use db::repository::bookings as booking_repo;

/// POST /v1/create_booking
///
/// Inserts one booking row.  Overlapping date ranges for the same room type
/// are not checked; the schema's foreign-key and date-order constraints are
/// the only gatekeepers.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    let room_type = require_str(&body, "room_type")?;
    let guest_name = require_str(&body, "guest_name")?;
    let checkin_date = require_date(&body, "checkin_date")?;
    let checkout_date = require_date(&body, "checkout_date")?;

    booking_repo::create_booking(&state.pool, room_type, guest_name, checkin_date, checkout_date)
        .await?;

    info!("Booking created: {body}");

    Ok(Json(json!({ "message": "Booking created successfully" })))
}

/// DELETE /v1/cancel_booking/{id}
///
/// Cancellation is physical deletion.  A missing id is an expected business
/// outcome and gets a success-shaped body, not an error.  The read and the
/// delete are two statements; racing cancels both pass the read but the
/// second delete is a no-op.
pub async fn cancel(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    match booking_repo::get_booking(&state.pool, booking_id).await? {
        Some(booking) => {
            booking_repo::delete_booking(&state.pool, booking_id).await?;
            info!("Booking canceled: {booking:?}");
            Ok(Json(json!({ "message": "Booking canceled successfully" })))
        }
        None => {
            warn!("Booking not found: {booking_id}");
            Ok(Json(json!({ "message": "Booking not found" })))
        }
    }
}

/// GET /v1/get_booking/guest/{guest_name}
///
/// Exact-match lookup; unknown guests get an empty list, not an error.
pub async fn by_guest(
    State(state): State<AppState>,
    Path(guest_name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let bookings = booking_repo::list_by_guest(&state.pool, &guest_name).await?;
    info!("Booking data: {bookings:?}");
    Ok(Json(json!({ "bookings": bookings })))
}

/// PUT /v1/update_booking/{id}
///
/// Unconditional full-row update.  An id that matches nothing updates zero
/// rows and still reports success; callers cannot tell the difference.
pub async fn update(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    let room_type = require_str(&body, "room_type")?;
    let guest_name = require_str(&body, "guest_name")?;
    let checkin_date = require_date(&body, "checkin_date")?;
    let checkout_date = require_date(&body, "checkout_date")?;

    booking_repo::update_booking(
        &state.pool,
        booking_id,
        room_type,
        guest_name,
        checkin_date,
        checkout_date,
    )
    .await?;

    info!("Booking updated: {body}");

    Ok(Json(json!({ "message": "Booking updated successfully" })))
}

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::{require_str, AppState};
use crate::ApiError;
use db::repository::rooms as room_repo;

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub room_type: String,
    pub availability: i64,
}

/// POST /v1/room_availability
///
/// Counts rooms of the requested type that are currently flagged available.
/// A room type nobody has heard of is a count of zero, not an error.
pub async fn room_availability(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let Json(body) = body?;
    let room_type = require_str(&body, "room_type")?;

    let availability = room_repo::count_available(&state.pool, room_type).await?;

    Ok(Json(AvailabilityResponse {
        room_type: room_type.to_owned(),
        availability,
    }))
}

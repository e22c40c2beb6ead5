//! Room queries.
//!
//! The service never mutates `rooms`; availability is a plain count over
//! the catalogue.

use sqlx::PgPool;

use crate::DbError;

/// Count rooms of the given type that are currently flagged available.
///
/// An unknown room type is not an error; the count is simply zero.
pub async fn count_available(pool: &PgPool, room_type: &str) -> Result<i64, DbError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM rooms WHERE room_type = $1 AND is_available = true",
    )
    .bind(room_type)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

//! Booking CRUD operations.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{models::BookingRow, DbError};

/// Insert a new booking row.
///
/// Referential integrity (`room_type` must exist in `rooms`) and date
/// ordering (`checkin_date < checkout_date`) are enforced by the schema;
/// violations surface as `DbError::Sqlx`.
pub async fn create_booking(
    pool: &PgPool,
    room_type: &str,
    guest_name: &str,
    checkin_date: NaiveDate,
    checkout_date: NaiveDate,
) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO bookings (room_type, guest_name, checkin_date, checkout_date) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(room_type)
    .bind(guest_name)
    .bind(checkin_date)
    .bind(checkout_date)
    .execute(pool)
    .await?;

    Ok(())
}

/// Fetch a single booking by its primary key.
pub async fn get_booking(pool: &PgPool, id: i32) -> Result<Option<BookingRow>, DbError> {
    let row = sqlx::query_as::<_, BookingRow>(
        "SELECT id, room_type, guest_name, checkin_date, checkout_date \
         FROM bookings WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Permanently delete a booking by its primary key.
///
/// Returns the number of rows removed; zero when the id does not exist.
pub async fn delete_booking(pool: &PgPool, id: i32) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Return all bookings whose guest name matches exactly, oldest first.
pub async fn list_by_guest(pool: &PgPool, guest_name: &str) -> Result<Vec<BookingRow>, DbError> {
    let rows = sqlx::query_as::<_, BookingRow>(
        "SELECT id, room_type, guest_name, checkin_date, checkout_date \
         FROM bookings WHERE guest_name = $1 ORDER BY id",
    )
    .bind(guest_name)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Overwrite every field of the booking with the given id.
///
/// Returns the number of rows updated.  Zero means the id does not exist;
/// callers decide whether that matters.
pub async fn update_booking(
    pool: &PgPool,
    id: i32,
    room_type: &str,
    guest_name: &str,
    checkin_date: NaiveDate,
    checkout_date: NaiveDate,
) -> Result<u64, DbError> {
    let result = sqlx::query(
        "UPDATE bookings SET room_type = $1, guest_name = $2, \
         checkin_date = $3, checkout_date = $4 WHERE id = $5",
    )
    .bind(room_type)
    .bind(guest_name)
    .bind(checkin_date)
    .bind(checkout_date)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

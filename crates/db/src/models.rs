//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models.  Handlers serialize them straight into
//! responses, so fields carry the column names and no caller ever depends
//! on column order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// rooms
// ---------------------------------------------------------------------------

/// A persisted room row.
///
/// Rooms are read-only from the service's point of view; they are created
/// by migrations or by hand, never through the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomRow {
    pub id: i32,
    /// Natural key: each room type appears at most once in `rooms`.
    pub room_type: String,
    pub is_available: bool,
}

// ---------------------------------------------------------------------------
// bookings
// ---------------------------------------------------------------------------

/// A persisted booking row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingRow {
    pub id: i32,
    /// References `rooms.room_type`; deletion of the room is restricted
    /// while bookings exist.
    pub room_type: String,
    pub guest_name: String,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_row_serializes_with_named_fields_and_iso_dates() {
        let row = BookingRow {
            id: 7,
            room_type: "AC".into(),
            guest_name: "Akshith".into(),
            checkin_date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
            checkout_date: NaiveDate::from_ymd_opt(2023, 4, 3).unwrap(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "room_type": "AC",
                "guest_name": "Akshith",
                "checkin_date": "2023-04-01",
                "checkout_date": "2023-04-03",
            })
        );
    }

    #[test]
    fn room_row_serializes_with_named_fields() {
        let row = RoomRow {
            id: 1,
            room_type: "Deluxe".into(),
            is_available: true,
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "room_type": "Deluxe",
                "is_available": true,
            })
        );
    }
}

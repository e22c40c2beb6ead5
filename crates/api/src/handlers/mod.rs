//! Request handlers, one module per resource, plus the helpers for pulling
//! required fields out of untyped JSON bodies.

pub mod availability;
pub mod bookings;

use chrono::NaiveDate;
use db::DbPool;
use serde_json::Value;

use crate::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

/// Pull a required string field out of a JSON request body.
///
/// Request bodies are only checked for key presence; a missing or
/// non-string field is a caller error, not a storage problem, so it maps
/// to the internal-error response.
pub(crate) fn require_str<'a>(body: &'a Value, key: &str) -> Result<&'a str, ApiError> {
    body.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Internal(format!("missing or invalid field '{key}'")))
}

/// Parse a required ISO `YYYY-MM-DD` date field out of a JSON request body.
pub(crate) fn require_date(body: &Value, key: &str) -> Result<NaiveDate, ApiError> {
    let raw = require_str(body, key)?;
    raw.parse()
        .map_err(|_| ApiError::Internal(format!("field '{key}' is not a valid date: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_str_returns_present_string_fields() {
        let body = json!({ "room_type": "AC" });
        assert_eq!(require_str(&body, "room_type").unwrap(), "AC");
    }

    #[test]
    fn require_str_rejects_missing_and_non_string_fields() {
        let body = json!({ "availability": 3 });
        assert!(require_str(&body, "room_type").is_err());
        assert!(require_str(&body, "availability").is_err());
    }

    #[test]
    fn require_date_parses_iso_dates() {
        let body = json!({ "checkin_date": "2023-04-01" });
        let date = require_date(&body, "checkin_date").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 4, 1).unwrap());
    }

    #[test]
    fn require_date_rejects_garbage() {
        let body = json!({ "checkin_date": "01/04/2023" });
        assert!(require_date(&body, "checkin_date").is_err());
    }
}

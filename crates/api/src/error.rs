//! Error mapping for the HTTP layer.
//!
//! Every handler returns `Result<_, ApiError>`.  The `IntoResponse`
//! conversion implements the service's error contract: storage failures and
//! everything else collapse into two generic JSON bodies, and each caught
//! failure is logged exactly once.  Connection cleanup needs no code here;
//! the pooled connection is returned on drop along every exit path.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Any storage-layer failure: constraint violations, connectivity loss,
    /// statement errors.  Detail is logged, never sent to the caller.
    #[error("database error: {0}")]
    Database(#[from] db::DbError),

    /// Everything else: malformed bodies, missing fields, bad values.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Internal(rejection.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Error bodies ride on the default 200 status like every other
        // response; clients key off the `error` field, not the status code.
        match self {
            ApiError::Database(e) => {
                error!("{e}");
                Json(json!({ "error": "Database error" })).into_response()
            }
            ApiError::Internal(msg) => {
                error!("{msg}");
                Json(json!({ "error": "Internal server error" })).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn database_errors_map_to_generic_body_on_default_status() {
        let err = ApiError::Database(db::DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "error": "Database error" }));
    }

    #[tokio::test]
    async fn other_errors_map_to_internal_server_error_body() {
        let err = ApiError::Internal("missing or invalid field 'room_type'".into());
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Internal server error" })
        );
    }
}
